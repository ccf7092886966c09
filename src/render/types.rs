//! Rendering-Typen: Uniforms und Vertex-Layout.

use crate::shared::LineVertex;
use bytemuck::{Pod, Zeroable};

/// Uniform-Buffer für View-Projektion
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    /// View-Projection-Matrix (4x4)
    pub view_proj: [[f32; 4]; 4],
}

/// Beschreibt das Vertex-Layout von [`LineVertex`] für wgpu.
pub const fn line_vertex_layout() -> eframe::wgpu::VertexBufferLayout<'static> {
    eframe::wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<LineVertex>() as eframe::wgpu::BufferAddress,
        step_mode: eframe::wgpu::VertexStepMode::Vertex,
        attributes: &[
            eframe::wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: eframe::wgpu::VertexFormat::Float32x3,
            },
            eframe::wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 3]>() as eframe::wgpu::BufferAddress,
                shader_location: 1,
                format: eframe::wgpu::VertexFormat::Float32x3,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_vertex_size() {
        let layout = line_vertex_layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(std::mem::size_of::<Uniforms>(), 64);
    }
}
