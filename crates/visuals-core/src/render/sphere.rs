use super::helpers::{self, MeshBuffers, PipelineOptions, UniformSlot};
use super::targets::DepthTarget;
use super::{GpuSurface, SceneRenderer};
use crate::geometry::MeshVertex;
use crate::scenes::{Scene, SphereScene};

pub struct SphereRenderer {
    pipeline: wgpu::RenderPipeline,
    uniforms: UniformSlot,
    mesh: MeshBuffers,
    depth: DepthTarget,
}

impl SceneRenderer for SphereRenderer {
    type Scene = SphereScene;

    fn create(gpu: &GpuSurface, scene: &SphereScene) -> Self {
        let device = &gpu.device;
        let shader = helpers::shader(device, "sphere_shader", crate::SPHERE_WGSL);
        let bgl = helpers::uniform_layout(device, "sphere_bgl");
        let pl = helpers::pipeline_layout(device, "sphere_pl", &bgl);
        let pipeline = helpers::make_pipeline(
            device,
            &pl,
            &shader,
            gpu.format(),
            PipelineOptions {
                label: "sphere_pipeline",
                vs_entry: "vs_sphere",
                fs_entry: "fs_sphere",
                buffers: &[MeshVertex::layout()],
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                depth_write: Some(true),
            },
        );
        let (w, h) = gpu.size();
        Self {
            pipeline,
            uniforms: UniformSlot::new(device, "sphere_uniforms", &bgl, &scene.uniforms()),
            mesh: MeshBuffers::upload(device, "sphere_mesh", scene.mesh()),
            depth: DepthTarget::new(device, w, h),
        }
    }

    fn resize(&mut self, gpu: &GpuSurface) {
        let (w, h) = gpu.size();
        self.depth.recreate(&gpu.device, w, h);
    }

    fn encode(
        &mut self,
        gpu: &GpuSurface,
        scene: &SphereScene,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) {
        self.uniforms.write(&gpu.queue, &scene.uniforms());
        let mut rpass =
            helpers::clear_pass(encoder, "sphere_pass", view, Some(self.depth.attachment()));
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.uniforms.bind_group, &[]);
        self.mesh.draw(&mut rpass, 0..1);
    }
}
