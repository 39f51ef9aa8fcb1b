//! Filled polygons with an optional outline.

use std::fmt;

use glam::Vec2;
use vellum_core::profiling::profile_function;
use vellum_core::{FloatRect, IntRect};
use vellum_geometry::{Transform, Transformable};

use crate::{
    Color, Drawable, PrimitiveType, RenderStates, RenderTarget, TextureHandle, Vertex, VertexArray,
};

/// The outline of a shape as an ordered list of local points.
///
/// Points are expected to describe a convex polygon; concave input is
/// tessellated anyway but will not render correctly.
pub trait ShapeGeometry {
    fn point_count(&self) -> usize;

    /// Point at `index`, in local coordinates. `index < point_count()`.
    fn point(&self, index: usize) -> Vec2;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// A point index past the end of the shape.
    PointOutOfRange { index: usize, count: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::PointOutOfRange { index, count } => {
                write!(f, "point index {index} is out of range for a shape with {count} points")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// A polygon described by `G`, drawn as a textured fill plus an outline.
///
/// Every change to the geometry or the outline thickness re-tessellates the
/// shape immediately, so drawing never does more than submit vertices.
/// Color and texture changes only touch the vertices they affect.
#[derive(Debug, Clone)]
pub struct Shape<G> {
    geometry: G,
    transformable: Transformable,
    texture: Option<TextureHandle>,
    texture_rect: IntRect,
    fill_color: Color,
    outline_color: Color,
    outline_thickness: f32,

    vertices: VertexArray,
    outline_vertices: VertexArray,
    inside_bounds: FloatRect,
    bounds: FloatRect,
}

impl<G: ShapeGeometry + Default> Default for Shape<G> {
    fn default() -> Self {
        Self::new(G::default())
    }
}

impl<G: ShapeGeometry> Shape<G> {
    pub fn new(geometry: G) -> Self {
        let mut shape = Self {
            geometry,
            transformable: Transformable::new(),
            texture: None,
            texture_rect: IntRect::default(),
            fill_color: Color::WHITE,
            outline_color: Color::WHITE,
            outline_thickness: 0.0,
            vertices: VertexArray::new(PrimitiveType::TriangleFan),
            outline_vertices: VertexArray::new(PrimitiveType::TriangleStrip),
            inside_bounds: FloatRect::default(),
            bounds: FloatRect::default(),
        };
        shape.update();
        shape
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn set_geometry(&mut self, geometry: G) {
        self.geometry = geometry;
        self.update();
    }

    /// Mutate the geometry in place, then re-tessellate.
    pub fn edit_geometry<R>(&mut self, edit: impl FnOnce(&mut G) -> R) -> R {
        let result = edit(&mut self.geometry);
        self.update();
        result
    }

    pub fn transformable(&self) -> &Transformable {
        &self.transformable
    }

    pub fn transformable_mut(&mut self) -> &mut Transformable {
        &mut self.transformable
    }

    pub fn transform(&self) -> Transform {
        self.transformable.transform()
    }

    pub fn inverse_transform(&self) -> Transform {
        self.transformable.inverse_transform()
    }

    pub fn texture(&self) -> Option<TextureHandle> {
        self.texture
    }

    /// Change the texture.
    ///
    /// The texture rect is reset to the whole texture when `reset_rect` is set,
    /// or when the shape had neither a texture nor a rect before.
    pub fn set_texture(&mut self, texture: Option<TextureHandle>, reset_rect: bool) {
        if let Some(handle) = texture {
            if reset_rect || (self.texture.is_none() && self.texture_rect == IntRect::default()) {
                let size = handle.size.as_ivec2();
                self.set_texture_rect(IntRect::new(0, 0, size.x, size.y));
            }
        }
        self.texture = texture;
    }

    pub fn texture_rect(&self) -> IntRect {
        self.texture_rect
    }

    pub fn set_texture_rect(&mut self, rect: IntRect) {
        self.texture_rect = rect;
        self.update_tex_coords();
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
        self.update_fill_colors();
    }

    pub fn outline_color(&self) -> Color {
        self.outline_color
    }

    pub fn set_outline_color(&mut self, color: Color) {
        self.outline_color = color;
        self.update_outline_colors();
    }

    pub fn outline_thickness(&self) -> f32 {
        self.outline_thickness
    }

    /// Negative thickness grows the outline inwards.
    pub fn set_outline_thickness(&mut self, thickness: f32) {
        self.outline_thickness = thickness;
        self.update();
    }

    /// Bounds in local coordinates, outline included.
    pub fn local_bounds(&self) -> FloatRect {
        self.bounds
    }

    /// Bounds after the shape's transform, as an axis-aligned box.
    pub fn global_bounds(&self) -> FloatRect {
        self.transform().transform_rect(self.local_bounds())
    }

    /// Fill vertices: centre, every point, then the first point again.
    pub fn fill_vertices(&self) -> &VertexArray {
        &self.vertices
    }

    pub fn outline_vertices(&self) -> &VertexArray {
        &self.outline_vertices
    }

    fn update(&mut self) {
        profile_function!();

        let count = self.geometry.point_count();
        if count < 3 {
            tracing::debug!(count, "shape has fewer than 3 points; leaving it empty");
            self.vertices.clear();
            self.outline_vertices.clear();
            self.inside_bounds = FloatRect::default();
            self.bounds = FloatRect::default();
            return;
        }

        tracing::trace!(count, "tessellating shape");

        self.vertices.resize(count + 2);
        for index in 0..count {
            self.vertices[index + 1].position = self.geometry.point(index);
        }
        self.vertices[count + 1].position = self.vertices[1].position;

        // Bounds exclude the centre slot, which is filled from them.
        self.inside_bounds = FloatRect::from_points(self.vertices.iter().skip(1).map(|v| v.position));
        self.vertices[0].position = self.inside_bounds.top_left() + self.inside_bounds.extent() / 2.0;

        self.update_fill_colors();
        self.update_tex_coords();
        self.update_outline();
    }

    fn update_fill_colors(&mut self) {
        let color = self.fill_color;
        for vertex in self.vertices.as_mut_slice() {
            vertex.color = color;
        }
    }

    fn update_tex_coords(&mut self) {
        let bounds = self.inside_bounds;
        let rect = FloatRect::from(self.texture_rect);
        for vertex in self.vertices.as_mut_slice() {
            let x_ratio = if bounds.width > 0.0 {
                (vertex.position.x - bounds.x) / bounds.width
            } else {
                0.0
            };
            let y_ratio = if bounds.height > 0.0 {
                (vertex.position.y - bounds.y) / bounds.height
            } else {
                0.0
            };
            vertex.tex_coords = Vec2::new(rect.x + rect.width * x_ratio, rect.y + rect.height * y_ratio);
        }
    }

    fn update_outline(&mut self) {
        if self.outline_thickness == 0.0 {
            self.outline_vertices.clear();
            self.bounds = self.inside_bounds;
            return;
        }

        let count = self.vertices.len() - 2;
        let center = self.vertices[0].position;
        self.outline_vertices.resize((count + 1) * 2);

        for i in 0..count {
            let index = i + 1;
            let p0 = if i == 0 {
                self.vertices[count].position
            } else {
                self.vertices[index - 1].position
            };
            let p1 = self.vertices[index].position;
            let p2 = self.vertices[index + 1].position;

            let n1 = outward(edge_normal(p0, p1), center - p1);
            let n2 = outward(edge_normal(p1, p2), center - p1);

            // Mitre: the sum of the two normals, stretched so both edges keep
            // the requested thickness.
            let factor = 1.0 + n1.dot(n2);
            let normal = (n1 + n2) / factor;

            self.outline_vertices[i * 2].position = p1;
            self.outline_vertices[i * 2 + 1].position = p1 + normal * self.outline_thickness;
        }

        self.outline_vertices[count * 2].position = self.outline_vertices[0].position;
        self.outline_vertices[count * 2 + 1].position = self.outline_vertices[1].position;

        self.update_outline_colors();
        self.bounds = self.outline_vertices.bounds();
    }

    fn update_outline_colors(&mut self) {
        let color = self.outline_color;
        for vertex in self.outline_vertices.as_mut_slice() {
            vertex.color = color;
        }
    }
}

/// Unit normal of the edge `p1 -> p2`; zero for a degenerate edge.
fn edge_normal(p1: Vec2, p2: Vec2) -> Vec2 {
    let normal = Vec2::new(p1.y - p2.y, p2.x - p1.x);
    let length = normal.length();
    if length != 0.0 { normal / length } else { normal }
}

/// Flip `normal` if it points towards the centre.
fn outward(normal: Vec2, to_center: Vec2) -> Vec2 {
    if normal.dot(to_center) > 0.0 { -normal } else { normal }
}

impl<G: ShapeGeometry> Drawable for Shape<G> {
    fn draw(&self, target: &mut dyn RenderTarget, states: &RenderStates) {
        if self.vertices.is_empty() {
            return;
        }

        let states = states.with_applied_transform(&self.transform());
        target.draw_primitives(
            self.vertices.as_slice(),
            PrimitiveType::TriangleFan,
            &states.with_texture(self.texture),
        );

        if self.outline_thickness != 0.0 {
            target.draw_primitives(
                self.outline_vertices.as_slice(),
                PrimitiveType::TriangleStrip,
                &states.with_texture(None),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default)]
    struct Square(f32);

    impl ShapeGeometry for Square {
        fn point_count(&self) -> usize {
            4
        }

        fn point(&self, index: usize) -> Vec2 {
            [Vec2::ZERO, Vec2::new(self.0, 0.0), Vec2::splat(self.0), Vec2::new(0.0, self.0)][index]
        }
    }

    struct Line;

    impl ShapeGeometry for Line {
        fn point_count(&self) -> usize {
            2
        }

        fn point(&self, index: usize) -> Vec2 {
            Vec2::new(index as f32, 0.0)
        }
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_fan_layout() {
        let shape = Shape::new(Square(10.0));
        let fill = shape.fill_vertices();
        assert_eq!(fill.len(), 6);
        assert_eq!(fill[0].position, Vec2::new(5.0, 5.0));
        assert_eq!(fill[1].position, Vec2::ZERO);
        assert_eq!(fill[5].position, fill[1].position);
        assert_eq!(shape.local_bounds(), FloatRect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_degenerate_geometry_is_empty() {
        let shape = Shape::new(Line);
        assert!(shape.fill_vertices().is_empty());
        assert!(shape.outline_vertices().is_empty());
        assert_eq!(shape.local_bounds(), FloatRect::default());
    }

    #[test]
    fn test_outline_extends_bounds() {
        let mut shape = Shape::new(Square(10.0));
        shape.set_outline_thickness(2.0);

        let outline = shape.outline_vertices();
        assert_eq!(outline.len(), 10);
        assert!(close(outline[1].position, Vec2::new(-2.0, -2.0)));
        assert_eq!(outline[8].position, outline[0].position);
        assert_eq!(outline[9].position, outline[1].position);

        let bounds = shape.local_bounds();
        assert!((bounds.x + 2.0).abs() < 1e-4);
        assert!((bounds.width - 14.0).abs() < 1e-4);

        shape.set_outline_thickness(0.0);
        assert!(shape.outline_vertices().is_empty());
        assert_eq!(shape.local_bounds(), FloatRect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_inward_outline() {
        let mut shape = Shape::new(Square(10.0));
        shape.set_outline_thickness(-1.0);
        assert!(close(shape.outline_vertices()[1].position, Vec2::new(1.0, 1.0)));
        assert_eq!(shape.local_bounds(), FloatRect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_texture_rect_maps_through_bounds() {
        let mut shape = Shape::new(Square(10.0));
        shape.set_texture(Some(TextureHandle::new(1, glam::UVec2::new(64, 32))), false);
        assert_eq!(shape.texture_rect(), IntRect::new(0, 0, 64, 32));

        let fill = shape.fill_vertices();
        assert_eq!(fill[0].tex_coords, Vec2::new(32.0, 16.0));
        assert_eq!(fill[3].tex_coords, Vec2::new(64.0, 32.0));

        shape.set_texture_rect(IntRect::new(10, 10, 20, 20));
        shape.set_texture(Some(TextureHandle::new(2, glam::UVec2::new(128, 128))), false);
        assert_eq!(shape.texture_rect(), IntRect::new(10, 10, 20, 20));
    }

    #[test]
    fn test_colors_touch_only_their_vertices() {
        let mut shape = Shape::new(Square(4.0));
        shape.set_outline_thickness(1.0);
        shape.set_fill_color(Color::RED);
        shape.set_outline_color(Color::BLUE);

        assert!(shape.fill_vertices().iter().all(|v| v.color == Color::RED));
        assert!(shape.outline_vertices().iter().all(|v| v.color == Color::BLUE));
    }

    #[test]
    fn test_global_bounds_follow_transform() {
        let mut shape = Shape::new(Square(10.0));
        shape.transformable_mut().set_position(Vec2::new(100.0, 50.0));
        shape.transformable_mut().set_scale(Vec2::splat(2.0));
        assert_eq!(shape.global_bounds(), FloatRect::new(100.0, 50.0, 20.0, 20.0));
    }

    #[test]
    fn test_error_display() {
        let err = ShapeError::PointOutOfRange { index: 5, count: 3 };
        assert_eq!(err.to_string(), "point index 5 is out of range for a shape with 3 points");
    }
}
