//! Vertices and primitive types.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::Color;

/// How a sequence of vertices is assembled into primitives.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveType {
    /// Each vertex is a point.
    #[default]
    Points,
    /// Each pair of vertices is a line.
    Lines,
    /// Consecutive vertices are connected by lines.
    LineStrip,
    /// Each triple of vertices is a triangle.
    Triangles,
    /// Each vertex forms a triangle with the previous two.
    TriangleStrip,
    /// Each vertex forms a triangle with the previous one and the first.
    TriangleFan,
    /// Each group of four vertices is a quad.
    Quads,
}

/// A point with a color and texture coordinates.
///
/// ```text
/// Offset | Field      | Size
/// -------|------------|------
/// 0      | position   | 8 bytes (2 x f32)
/// 8      | color      | 4 bytes (4 x u8)
/// 12     | tex_coords | 8 bytes (2 x f32)
/// Total: 20 bytes
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec2,
    pub color: Color,
    /// Texture coordinates in pixels.
    pub tex_coords: Vec2,
}

static_assertions::assert_eq_size!(Vertex, [u8; 20]);

impl Default for Vertex {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

impl Vertex {
    /// A white vertex at `position`.
    pub const fn new(position: Vec2) -> Self {
        Self::with_color_and_tex_coords(position, Color::WHITE, Vec2::ZERO)
    }

    pub const fn with_color(position: Vec2, color: Color) -> Self {
        Self::with_color_and_tex_coords(position, color, Vec2::ZERO)
    }

    pub const fn with_tex_coords(position: Vec2, tex_coords: Vec2) -> Self {
        Self::with_color_and_tex_coords(position, Color::WHITE, tex_coords)
    }

    pub const fn with_color_and_tex_coords(position: Vec2, color: Color, tex_coords: Vec2) -> Self {
        Self {
            position,
            color,
            tex_coords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_size() {
        assert_eq!(std::mem::size_of::<Vertex>(), 20);
    }

    #[test]
    fn test_vertex_bytes() {
        let v = Vertex::with_color_and_tex_coords(Vec2::new(1.0, 2.0), Color::rgba(1, 2, 3, 4), Vec2::new(5.0, 6.0));
        let bytes = bytemuck::bytes_of(&v);
        assert_eq!(&bytes[8..12], &[1, 2, 3, 4]);
        let floats: [f32; 2] = bytemuck::pod_read_unaligned(&bytes[12..20]);
        assert_eq!(floats, [5.0, 6.0]);
    }

    #[test]
    fn test_default_color_is_white() {
        assert_eq!(Vertex::new(Vec2::ONE).color, Color::WHITE);
    }
}
