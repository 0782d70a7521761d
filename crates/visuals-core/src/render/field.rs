use super::helpers::{self, PipelineOptions, UniformSlot};
use super::{GpuSurface, SceneRenderer};
use crate::scenes::{FieldScene, Scene};

/// Single full-screen triangle; no vertex buffers, no depth.
pub struct FieldRenderer {
    pipeline: wgpu::RenderPipeline,
    uniforms: UniformSlot,
}

impl SceneRenderer for FieldRenderer {
    type Scene = FieldScene;

    fn create(gpu: &GpuSurface, scene: &FieldScene) -> Self {
        let device = &gpu.device;
        let shader = helpers::shader(device, "field_shader", crate::FIELD_WGSL);
        let bgl = helpers::uniform_layout(device, "field_bgl");
        let pl = helpers::pipeline_layout(device, "field_pl", &bgl);
        let pipeline = helpers::make_pipeline(
            device,
            &pl,
            &shader,
            gpu.format(),
            PipelineOptions {
                label: "field_pipeline",
                vs_entry: "vs_fullscreen",
                fs_entry: "fs_field",
                buffers: &[],
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                depth_write: None,
            },
        );
        let uniforms = UniformSlot::new(device, "field_uniforms", &bgl, &scene.uniforms());
        Self { pipeline, uniforms }
    }

    fn encode(
        &mut self,
        gpu: &GpuSurface,
        scene: &FieldScene,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) {
        self.uniforms.write(&gpu.queue, &scene.uniforms());
        let mut rpass = helpers::clear_pass(encoder, "field_pass", view, None);
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.uniforms.bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }
}
