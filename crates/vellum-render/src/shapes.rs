//! The stock shape geometries.

use std::f32::consts::PI;

use glam::Vec2;

use crate::{Shape, ShapeError, ShapeGeometry};

pub type CircleShape = Shape<Circle>;
pub type RectangleShape = Shape<Rectangle>;
pub type ConvexShape = Shape<Convex>;

/// A regular polygon approximating a circle whose bounding box starts at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f32,
    pub point_count: usize,
}

impl Circle {
    pub const DEFAULT_POINT_COUNT: usize = 30;

    pub const fn new(radius: f32) -> Self {
        Self {
            radius,
            point_count: Self::DEFAULT_POINT_COUNT,
        }
    }

    pub const fn with_point_count(radius: f32, point_count: usize) -> Self {
        Self { radius, point_count }
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ShapeGeometry for Circle {
    fn point_count(&self) -> usize {
        self.point_count
    }

    /// Points start at the top and run clockwise on screen.
    fn point(&self, index: usize) -> Vec2 {
        let angle = index as f32 * 2.0 * PI / self.point_count as f32 - PI / 2.0;
        let (sine, cosine) = angle.sin_cos();
        Vec2::new(self.radius + cosine * self.radius, self.radius + sine * self.radius)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    pub size: Vec2,
}

impl Rectangle {
    pub const fn new(size: Vec2) -> Self {
        Self { size }
    }
}

impl ShapeGeometry for Rectangle {
    fn point_count(&self) -> usize {
        4
    }

    fn point(&self, index: usize) -> Vec2 {
        match index {
            0 => Vec2::ZERO,
            1 => Vec2::new(self.size.x, 0.0),
            2 => self.size,
            _ => Vec2::new(0.0, self.size.y),
        }
    }
}

/// An arbitrary convex polygon given point by point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Convex {
    points: Vec<Vec2>,
}

impl Convex {
    /// `point_count` points, all at the origin.
    pub fn new(point_count: usize) -> Self {
        Self {
            points: vec![Vec2::ZERO; point_count],
        }
    }

    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Grow with points at the origin, or drop trailing points.
    pub fn set_point_count(&mut self, count: usize) {
        self.points.resize(count, Vec2::ZERO);
    }

    pub fn set_point(&mut self, index: usize, point: Vec2) -> Result<(), ShapeError> {
        let count = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(ShapeError::PointOutOfRange { index, count })?;
        *slot = point;
        Ok(())
    }
}

impl ShapeGeometry for Convex {
    fn point_count(&self) -> usize {
        self.points.len()
    }

    fn point(&self, index: usize) -> Vec2 {
        self.points[index]
    }
}

impl Shape<Circle> {
    pub fn circle(radius: f32) -> Self {
        Self::new(Circle::new(radius))
    }

    pub fn radius(&self) -> f32 {
        self.geometry().radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.edit_geometry(|circle| circle.radius = radius);
    }

    pub fn set_point_count(&mut self, count: usize) {
        self.edit_geometry(|circle| circle.point_count = count);
    }
}

impl Shape<Rectangle> {
    pub fn rectangle(size: Vec2) -> Self {
        Self::new(Rectangle::new(size))
    }

    pub fn size(&self) -> Vec2 {
        self.geometry().size
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.edit_geometry(|rect| rect.size = size);
    }
}

impl Shape<Convex> {
    pub fn convex(points: impl IntoIterator<Item = Vec2>) -> Self {
        Self::new(Convex::from_points(points))
    }

    pub fn set_point_count(&mut self, count: usize) {
        self.edit_geometry(|convex| convex.set_point_count(count));
    }

    /// Move one point; the shape is left untouched on error.
    pub fn set_point(&mut self, index: usize, point: Vec2) -> Result<(), ShapeError> {
        let count = self.geometry().point_count();
        if index >= count {
            return Err(ShapeError::PointOutOfRange { index, count });
        }
        self.edit_geometry(|convex| convex.set_point(index, point))
    }
}
