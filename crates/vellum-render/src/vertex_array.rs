//! Owned, growable vertex arrays.

use std::ops::{Index, IndexMut};

use vellum_core::FloatRect;
use vellum_core::profiling::profile_function;

use crate::{Drawable, PrimitiveType, RenderStates, RenderTarget, Vertex};

/// A list of vertices drawn as one primitive type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexArray {
    vertices: Vec<Vertex>,
    primitive_type: PrimitiveType,
}

impl VertexArray {
    pub fn new(primitive_type: PrimitiveType) -> Self {
        Self {
            vertices: Vec::new(),
            primitive_type,
        }
    }

    /// An array of `count` default vertices.
    pub fn with_len(primitive_type: PrimitiveType, count: usize) -> Self {
        Self {
            vertices: vec![Vertex::default(); count],
            primitive_type,
        }
    }

    pub fn from_vertices(primitive_type: PrimitiveType, vertices: Vec<Vertex>) -> Self {
        Self {
            vertices,
            primitive_type,
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Vertex> {
        self.vertices.get_mut(index)
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Grow with default vertices or truncate to `count`.
    pub fn resize(&mut self, count: usize) {
        self.vertices.resize(count, Vertex::default());
    }

    pub fn append(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    pub fn primitive_type(&self) -> PrimitiveType {
        self.primitive_type
    }

    pub fn set_primitive_type(&mut self, primitive_type: PrimitiveType) {
        self.primitive_type = primitive_type;
    }

    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn as_mut_slice(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    /// Axis-aligned bounding box of the vertex positions.
    pub fn bounds(&self) -> FloatRect {
        profile_function!();
        FloatRect::from_points(self.vertices.iter().map(|v| v.position))
    }
}

impl Index<usize> for VertexArray {
    type Output = Vertex;

    fn index(&self, index: usize) -> &Vertex {
        &self.vertices[index]
    }
}

impl IndexMut<usize> for VertexArray {
    fn index_mut(&mut self, index: usize) -> &mut Vertex {
        &mut self.vertices[index]
    }
}

impl Extend<Vertex> for VertexArray {
    fn extend<I: IntoIterator<Item = Vertex>>(&mut self, iter: I) {
        self.vertices.extend(iter);
    }
}

impl Drawable for VertexArray {
    fn draw(&self, target: &mut dyn RenderTarget, states: &RenderStates) {
        if self.vertices.is_empty() {
            return;
        }
        target.draw_primitives(&self.vertices, self.primitive_type, states);
    }
}
