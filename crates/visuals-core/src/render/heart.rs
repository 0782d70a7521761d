use super::helpers::{self, MeshBuffers, PipelineOptions, UniformSlot};
use super::targets::DepthTarget;
use super::{GpuSurface, SceneRenderer};
use crate::geometry::MeshVertex;
use crate::scenes::{HeartScene, Scene};

/// Heart body, holographic ring and particle points. The three draws share
/// one shader module and uniform layout, each with its own buffer.
pub struct HeartRenderer {
    body_pipeline: wgpu::RenderPipeline,
    ring_pipeline: wgpu::RenderPipeline,
    points_pipeline: wgpu::RenderPipeline,
    body_uniforms: UniformSlot,
    ring_uniforms: UniformSlot,
    points_uniforms: UniformSlot,
    body: MeshBuffers,
    ring: MeshBuffers,
    points: wgpu::Buffer,
    point_count: u32,
    depth: DepthTarget,
}

impl SceneRenderer for HeartRenderer {
    type Scene = HeartScene;

    fn create(gpu: &GpuSurface, scene: &HeartScene) -> Self {
        let device = &gpu.device;
        let shader = helpers::shader(device, "heart_shader", crate::HEART_WGSL);
        let bgl = helpers::uniform_layout(device, "heart_bgl");
        let pl = helpers::pipeline_layout(device, "heart_pl", &bgl);
        let buffers = [MeshVertex::layout()];
        let pipeline = |label, vs_entry, fs_entry, topology| {
            helpers::make_pipeline(
                device,
                &pl,
                &shader,
                gpu.format(),
                PipelineOptions {
                    label,
                    vs_entry,
                    fs_entry,
                    buffers: &buffers,
                    topology,
                    // Translucent surfaces are visible from both sides
                    cull_mode: None,
                    depth_write: Some(true),
                },
            )
        };
        let body_pipeline = pipeline(
            "heart_body_pipeline",
            "vs_heart",
            "fs_heart",
            wgpu::PrimitiveTopology::TriangleList,
        );
        let ring_pipeline = pipeline(
            "heart_ring_pipeline",
            "vs_flat",
            "fs_flat",
            wgpu::PrimitiveTopology::TriangleList,
        );
        let points_pipeline = pipeline(
            "heart_points_pipeline",
            "vs_flat",
            "fs_flat",
            wgpu::PrimitiveTopology::PointList,
        );

        let (w, h) = gpu.size();
        Self {
            body_pipeline,
            ring_pipeline,
            points_pipeline,
            body_uniforms: UniformSlot::new(device, "heart_body_uniforms", &bgl, &scene.uniforms()),
            ring_uniforms: UniformSlot::new(
                device,
                "heart_ring_uniforms",
                &bgl,
                &scene.ring_uniforms(),
            ),
            points_uniforms: UniformSlot::new(
                device,
                "heart_points_uniforms",
                &bgl,
                &scene.particle_uniforms(),
            ),
            body: MeshBuffers::upload(device, "heart_body", scene.body()),
            ring: MeshBuffers::upload(device, "heart_ring", scene.ring()),
            points: helpers::vertex_buffer(device, "heart_points", scene.particles()),
            point_count: scene.particles().len() as u32,
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
        scene: &HeartScene,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) {
        self.body_uniforms.write(&gpu.queue, &scene.uniforms());
        self.ring_uniforms.write(&gpu.queue, &scene.ring_uniforms());
        self.points_uniforms
            .write(&gpu.queue, &scene.particle_uniforms());

        let mut rpass =
            helpers::clear_pass(encoder, "heart_pass", view, Some(self.depth.attachment()));

        rpass.set_pipeline(&self.body_pipeline);
        rpass.set_bind_group(0, &self.body_uniforms.bind_group, &[]);
        self.body.draw(&mut rpass, 0..1);

        rpass.set_pipeline(&self.ring_pipeline);
        rpass.set_bind_group(0, &self.ring_uniforms.bind_group, &[]);
        self.ring.draw(&mut rpass, 0..1);

        rpass.set_pipeline(&self.points_pipeline);
        rpass.set_bind_group(0, &self.points_uniforms.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.points.slice(..));
        rpass.draw(0..self.point_count, 0..1);
    }
}
