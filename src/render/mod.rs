//! GPU-Rendering mit wgpu.

mod callback;
mod line_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use callback::WgpuRenderCallback;
pub(crate) use line_renderer::LineRenderer;

use eframe::egui_wgpu;

/// Haupt-Renderer für die Demo-Szenen.
///
/// Verwaltet seinen eigenen GPU-Zustand (Pipeline, Buffer):
/// `new()` + `render_scene()`.
pub struct Renderer {
    line_renderer: LineRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let device = &render_state.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Line Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders.wgsl").into()),
        });

        Self {
            line_renderer: LineRenderer::new(render_state, &shader),
        }
    }

    /// Rendert die komplette Szene
    pub fn render_scene(
        &mut self,
        device: &eframe::wgpu::Device,
        queue: &eframe::wgpu::Queue,
        render_pass: &mut eframe::wgpu::RenderPass<'static>,
        scene: &RenderScene,
    ) {
        log::trace!(
            "Renderer.render_scene(): {} Segmente",
            scene.segment_count()
        );
        self.line_renderer.render(device, queue, render_pass, scene);
    }
}
