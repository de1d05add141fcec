//! GPU-compatible vertex type for the 2D draw pass
//!
//! Matches the vertex input of `draw2d.wgsl`.

use bytemuck::{Pod, Zeroable};

use hyperview_core::Rgba;

/// Texture coordinate marking an untextured vertex
pub const SOLID_UV: [f32; 2] = [-1.0, -1.0];

/// A clip-space vertex with color and glyph atlas coordinate
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex2D {
    /// Position in clip space (x, y)
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
    /// Atlas coordinate, or [`SOLID_UV`] for flat-colored geometry
    pub uv: [f32; 2],
}

impl Vertex2D {
    /// Flat-colored vertex
    pub fn new(position: [f32; 2], color: Rgba) -> Self {
        Self::textured(position, color, SOLID_UV)
    }

    /// Vertex whose alpha is modulated by the glyph atlas
    pub fn textured(position: [f32; 2], color: Rgba, uv: [f32; 2]) -> Self {
        Self {
            position,
            color: color.to_array(),
            uv,
        }
    }

    pub fn is_textured(&self) -> bool {
        self.uv[0] >= 0.0
    }

    /// Vertex buffer layout for the draw pipeline
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex2D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec2<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                },
                // color: vec4<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 8,
                    shader_location: 1,
                },
                // uv: vec2<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 24,
                    shader_location: 2,
                },
            ],
        }
    }
}

impl Default for Vertex2D {
    fn default() -> Self {
        Self {
            position: [0.0; 2],
            color: [0.0; 4],
            uv: SOLID_UV,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_vertex2d_size() {
        // 2 floats position + 4 floats color + 2 floats uv = 32 bytes
        assert_eq!(size_of::<Vertex2D>(), 32);
        assert_eq!(std::mem::align_of::<Vertex2D>(), 4);
    }

    #[test]
    fn test_layout_stride() {
        let layout = Vertex2D::layout();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.attributes[2].offset, 24);
    }

    #[test]
    fn test_solid_and_textured() {
        let white = Rgba::new(1.0, 1.0, 1.0, 1.0);
        assert!(!Vertex2D::new([0.0, 0.0], white).is_textured());
        assert!(Vertex2D::textured([0.0, 0.0], white, [0.0, 0.5]).is_textured());
        assert!(!Vertex2D::default().is_textured());
    }
}
