use super::helpers::{self, MeshBuffers, PipelineOptions, UniformSlot};
use super::targets::DepthTarget;
use super::{GpuSurface, SceneRenderer};
use crate::geometry::MeshVertex;
use crate::scenes::{HelixScene, Scene};
use crate::uniforms::{MarkerInstance, RungInstance};

/// Instanced marker spheres, then the faint rungs on top without depth writes.
pub struct HelixRenderer {
    marker_pipeline: wgpu::RenderPipeline,
    rung_pipeline: wgpu::RenderPipeline,
    uniforms: UniformSlot,
    marker_mesh: MeshBuffers,
    rung_mesh: MeshBuffers,
    markers: wgpu::Buffer,
    marker_count: u32,
    rungs: wgpu::Buffer,
    rung_count: u32,
    depth: DepthTarget,
}

impl SceneRenderer for HelixRenderer {
    type Scene = HelixScene;

    fn create(gpu: &GpuSurface, scene: &HelixScene) -> Self {
        let device = &gpu.device;
        let shader = helpers::shader(device, "helix_shader", crate::HELIX_WGSL);
        let bgl = helpers::uniform_layout(device, "helix_bgl");
        let pl = helpers::pipeline_layout(device, "helix_pl", &bgl);
        let marker_pipeline = helpers::make_pipeline(
            device,
            &pl,
            &shader,
            gpu.format(),
            PipelineOptions {
                label: "helix_marker_pipeline",
                vs_entry: "vs_marker",
                fs_entry: "fs_marker",
                buffers: &[MeshVertex::layout(), MarkerInstance::layout()],
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                depth_write: Some(true),
            },
        );
        let rung_pipeline = helpers::make_pipeline(
            device,
            &pl,
            &shader,
            gpu.format(),
            PipelineOptions {
                label: "helix_rung_pipeline",
                vs_entry: "vs_rung",
                fs_entry: "fs_rung",
                buffers: &[MeshVertex::layout(), RungInstance::layout()],
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                depth_write: Some(false),
            },
        );

        let markers = scene.markers();
        let rungs = scene.rungs();
        let (w, h) = gpu.size();
        Self {
            marker_pipeline,
            rung_pipeline,
            uniforms: UniformSlot::new(device, "helix_uniforms", &bgl, &scene.uniforms()),
            marker_mesh: MeshBuffers::upload(device, "helix_marker_mesh", scene.marker_mesh()),
            rung_mesh: MeshBuffers::upload(device, "helix_rung_mesh", scene.rung_mesh()),
            markers: helpers::vertex_buffer(device, "helix_markers", &markers),
            marker_count: markers.len() as u32,
            rungs: helpers::vertex_buffer(device, "helix_rungs", &rungs),
            rung_count: rungs.len() as u32,
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
        scene: &HelixScene,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) {
        self.uniforms.write(&gpu.queue, &scene.uniforms());
        let mut rpass =
            helpers::clear_pass(encoder, "helix_pass", view, Some(self.depth.attachment()));
        rpass.set_bind_group(0, &self.uniforms.bind_group, &[]);

        rpass.set_pipeline(&self.marker_pipeline);
        rpass.set_vertex_buffer(1, self.markers.slice(..));
        self.marker_mesh.draw(&mut rpass, 0..self.marker_count);

        rpass.set_pipeline(&self.rung_pipeline);
        rpass.set_vertex_buffer(1, self.rungs.slice(..));
        self.rung_mesh.draw(&mut rpass, 0..self.rung_count);
    }
}
