//! Decomposed transforms: position, rotation, scale and origin.

use std::cell::Cell;

use glam::Vec2;
use vellum_core::math::to_radians;

use crate::Transform;

/// A transform described by its components rather than by a matrix.
///
/// Drawables own one of these. The composed [`Transform`] and its inverse are
/// derived lazily: setters only record the new value and mark both caches
/// stale, and the matrix is rebuilt on the next read.
///
/// The caches live in [`Cell`]s so that reads work through `&self`. A
/// `Transformable` is therefore not `Sync`; share it between threads only
/// behind your own synchronization.
///
/// Rotation is in degrees and turns clockwise on screen (y pointing down).
#[derive(Debug, Clone)]
pub struct Transformable {
    origin: Vec2,
    position: Vec2,
    rotation: f32,
    scale: Vec2,

    transform: Cell<Transform>,
    inverse: Cell<Transform>,
    transform_stale: Cell<bool>,
    inverse_stale: Cell<bool>,

    #[cfg(test)]
    rebuilds: Cell<usize>,
}

impl Default for Transformable {
    fn default() -> Self {
        Self::new()
    }
}

impl Transformable {
    pub fn new() -> Self {
        Self {
            origin: Vec2::ZERO,
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
            transform: Cell::new(Transform::IDENTITY),
            inverse: Cell::new(Transform::IDENTITY),
            transform_stale: Cell::new(true),
            inverse_stale: Cell::new(true),
            #[cfg(test)]
            rebuilds: Cell::new(0),
        }
    }

    /// Local point about which rotation and scale are applied.
    ///
    /// Expressed relative to the object's top-left corner, before any
    /// transformation.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
        self.invalidate();
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.invalidate();
    }

    /// Rotation in degrees, stored exactly as set.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, angle: f32) {
        self.rotation = angle;
        self.invalidate();
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn set_scale(&mut self, factors: Vec2) {
        self.scale = factors;
        self.invalidate();
    }

    /// Offset the position.
    pub fn move_by(&mut self, offset: Vec2) {
        self.set_position(self.position + offset);
    }

    /// Add to the current rotation.
    pub fn rotate_by(&mut self, angle: f32) {
        self.set_rotation(self.rotation + angle);
    }

    /// Multiply the current scale component-wise.
    pub fn scale_by(&mut self, factors: Vec2) {
        self.set_scale(self.scale * factors);
    }

    /// The composed transform, rebuilt if any component changed.
    pub fn transform(&self) -> Transform {
        if self.transform_stale.get() {
            self.transform.set(self.compose());
            self.transform_stale.set(false);
        }
        self.transform.get()
    }

    /// Inverse of [`Transformable::transform`], cached independently.
    ///
    /// Reading the inverse leaves the forward cache untouched; if that one is
    /// stale the matrix is composed on the side without filling it.
    pub fn inverse_transform(&self) -> Transform {
        if self.inverse_stale.get() {
            let forward = if self.transform_stale.get() {
                self.compose()
            } else {
                self.transform.get()
            };
            self.inverse.set(forward.inverse());
            self.inverse_stale.set(false);
        }
        self.inverse.get()
    }

    pub fn is_transform_stale(&self) -> bool {
        self.transform_stale.get()
    }

    pub fn is_inverse_stale(&self) -> bool {
        self.inverse_stale.get()
    }

    fn invalidate(&mut self) {
        self.transform_stale.set(true);
        self.inverse_stale.set(true);
    }

    fn compose(&self) -> Transform {
        #[cfg(test)]
        self.rebuilds.set(self.rebuilds.get() + 1);

        let angle = -to_radians(self.rotation);
        let (sine, cosine) = angle.sin_cos();
        let sxc = self.scale.x * cosine;
        let syc = self.scale.y * cosine;
        let sxs = self.scale.x * sine;
        let sys = self.scale.y * sine;
        let tx = -self.origin.x * sxc - self.origin.y * sys + self.position.x;
        let ty = self.origin.x * sxs - self.origin.y * syc + self.position.y;

        tracing::trace!(
            position = ?self.position,
            rotation = self.rotation,
            "rebuilding transformable matrix"
        );

        Transform::new(sxc, sys, tx, -sxs, syc, ty, 0.0, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_do_not_rebuild() {
        let mut t = Transformable::new();
        for i in 0..100 {
            t.set_position(Vec2::new(i as f32, 0.0));
            t.set_rotation(i as f32);
            t.set_scale(Vec2::splat(i as f32));
            t.set_origin(Vec2::new(0.0, i as f32));
        }
        assert_eq!(t.rebuilds.get(), 0);
        assert!(t.is_transform_stale());

        t.transform();
        t.transform();
        assert_eq!(t.rebuilds.get(), 1);
        assert!(!t.is_transform_stale());
    }

    #[test]
    fn test_inverse_does_not_fill_forward_cache() {
        let mut t = Transformable::new();
        t.set_position(Vec2::new(5.0, 5.0));

        t.inverse_transform();
        assert!(t.is_transform_stale());
        assert!(!t.is_inverse_stale());

        t.transform();
        t.inverse_transform();
        assert_eq!(t.rebuilds.get(), 2);
    }

    #[test]
    fn test_inverse_reuses_fresh_forward() {
        let mut t = Transformable::new();
        t.set_rotation(10.0);
        t.transform();
        t.inverse_transform();
        assert_eq!(t.rebuilds.get(), 1);
    }

    #[test]
    fn test_relative_helpers() {
        let mut t = Transformable::new();
        t.set_position(Vec2::new(1.0, 1.0));
        t.move_by(Vec2::new(2.0, 3.0));
        t.rotate_by(30.0);
        t.rotate_by(30.0);
        t.scale_by(Vec2::new(2.0, 4.0));

        assert_eq!(t.position(), Vec2::new(3.0, 4.0));
        assert_eq!(t.rotation(), 60.0);
        assert_eq!(t.scale(), Vec2::new(2.0, 4.0));
    }
}
