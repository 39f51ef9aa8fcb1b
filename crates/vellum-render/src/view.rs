//! 2D cameras.

use std::cell::Cell;

use glam::Vec2;
use vellum_core::FloatRect;
use vellum_core::math::to_radians;
use vellum_geometry::Transform;

/// A 2D camera: which region of the world is shown and where on the target.
///
/// The projection into normalized device coordinates is derived lazily, with
/// the same caching rules as [`vellum_geometry::Transformable`].
#[derive(Debug, Clone)]
pub struct View {
    center: Vec2,
    size: Vec2,
    rotation: f32,
    viewport: FloatRect,

    transform: Cell<Transform>,
    inverse: Cell<Transform>,
    transform_stale: Cell<bool>,
    inverse_stale: Cell<bool>,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// A view of the rectangle `(0, 0, 1000, 1000)`.
    pub fn new() -> Self {
        Self::from_rect(FloatRect::new(0.0, 0.0, 1000.0, 1000.0))
    }

    pub fn from_rect(rect: FloatRect) -> Self {
        let mut view = Self::from_center_size(Vec2::ZERO, Vec2::ZERO);
        view.reset(rect);
        view
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            size,
            rotation: 0.0,
            viewport: FloatRect::new(0.0, 0.0, 1.0, 1.0),
            transform: Cell::new(Transform::IDENTITY),
            inverse: Cell::new(Transform::IDENTITY),
            transform_stale: Cell::new(true),
            inverse_stale: Cell::new(true),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
        self.invalidate();
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
        self.invalidate();
    }

    /// Rotation in degrees, always in `[0, 360)`.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, angle: f32) {
        let wrapped = angle % 360.0;
        self.rotation = if wrapped < 0.0 { wrapped + 360.0 } else { wrapped };
        self.invalidate();
    }

    /// Area of the target the view is displayed in, as fractions of the target size.
    pub fn viewport(&self) -> FloatRect {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: FloatRect) {
        self.viewport = viewport;
    }

    /// Show exactly `rect`, with rotation cleared.
    pub fn reset(&mut self, rect: FloatRect) {
        self.center = Vec2::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
        self.size = Vec2::new(rect.width, rect.height);
        self.rotation = 0.0;
        self.invalidate();
    }

    pub fn move_by(&mut self, offset: Vec2) {
        self.set_center(self.center + offset);
    }

    pub fn rotate_by(&mut self, angle: f32) {
        self.set_rotation(self.rotation + angle);
    }

    /// Scale the visible area; a factor above 1 zooms out.
    pub fn zoom(&mut self, factor: f32) {
        self.set_size(self.size * factor);
    }

    /// Projection from world coordinates to normalized device coordinates.
    pub fn transform(&self) -> Transform {
        if self.transform_stale.get() {
            self.transform.set(self.compose());
            self.transform_stale.set(false);
        }
        self.transform.get()
    }

    /// Projection from normalized device coordinates back to world coordinates.
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

    /// Whether the visible area has a finite, non-zero width and height.
    pub fn has_area(&self) -> bool {
        self.size.is_finite() && self.size.x != 0.0 && self.size.y != 0.0
    }

    fn invalidate(&mut self) {
        self.transform_stale.set(true);
        self.inverse_stale.set(true);
    }

    fn compose(&self) -> Transform {
        tracing::trace!(center = ?self.center, size = ?self.size, "rebuilding view projection");

        // 2/w would be infinite and fill the matrix with NaN.
        if !self.has_area() {
            tracing::warn!(size = ?self.size, "view has no area, projecting with identity");
            return Transform::IDENTITY;
        }

        let (sine, cosine) = to_radians(self.rotation).sin_cos();
        let Vec2 { x: cx, y: cy } = self.center;
        let tx = -cx * cosine - cy * sine + cx;
        let ty = cx * sine - cy * cosine + cy;

        let a = 2.0 / self.size.x;
        let b = -2.0 / self.size.y;
        let c = -a * cx;
        let d = -b * cy;

        Transform::new(
            a * cosine,
            a * sine,
            a * tx + c,
            -b * sine,
            b * cosine,
            b * ty + d,
            0.0,
            0.0,
            1.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_default_view() {
        let view = View::new();
        assert_eq!(view.center(), Vec2::new(500.0, 500.0));
        assert_eq!(view.size(), Vec2::new(1000.0, 1000.0));
        assert_eq!(view.viewport(), FloatRect::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn test_projection_corners() {
        let view = View::from_rect(FloatRect::new(0.0, 0.0, 800.0, 600.0));
        let t = view.transform();
        assert!(close(t.transform_point(Vec2::ZERO), Vec2::new(-1.0, 1.0)));
        assert!(close(t.transform_point(Vec2::new(800.0, 600.0)), Vec2::new(1.0, -1.0)));
        assert!(close(t.transform_point(Vec2::new(400.0, 300.0)), Vec2::ZERO));
    }

    #[test]
    fn test_inverse_projection() {
        let mut view = View::from_rect(FloatRect::new(100.0, 50.0, 200.0, 100.0));
        view.rotate_by(30.0);
        let world = Vec2::new(150.0, 80.0);
        let ndc = view.transform().transform_point(world);
        assert!(close(view.inverse_transform().transform_point(ndc), world));
    }

    #[test]
    fn test_rotation_wraps() {
        let mut view = View::new();
        view.set_rotation(-90.0);
        assert_eq!(view.rotation(), 270.0);
        view.rotate_by(180.0);
        assert_eq!(view.rotation(), 90.0);
    }

    #[test]
    fn test_zoom_and_move() {
        let mut view = View::new();
        view.zoom(0.5);
        view.move_by(Vec2::new(10.0, -10.0));
        assert_eq!(view.size(), Vec2::new(500.0, 500.0));
        assert_eq!(view.center(), Vec2::new(510.0, 490.0));
        assert!(close(view.transform().transform_point(Vec2::new(510.0, 490.0)), Vec2::ZERO));
    }

    #[test]
    fn test_zero_size_view_inverse_is_identity() {
        let view = View::from_center_size(Vec2::ZERO, Vec2::ZERO);
        assert!(!view.has_area());
        assert_eq!(view.inverse_transform(), Transform::IDENTITY);
        assert_eq!(view.transform(), Transform::IDENTITY);
    }

    #[test]
    fn test_degenerate_sizes_never_produce_nan() {
        let sizes = [
            Vec2::new(0.0, 600.0),
            Vec2::new(800.0, 0.0),
            Vec2::new(f32::INFINITY, 600.0),
            Vec2::new(800.0, f32::NAN),
        ];
        for size in sizes {
            let mut view = View::from_center_size(Vec2::new(400.0, 300.0), size);
            view.set_rotation(30.0);
            assert!(!view.has_area());
            assert_eq!(view.transform(), Transform::IDENTITY);
            assert_eq!(view.inverse_transform(), Transform::IDENTITY);
        }

        let mut view = View::from_center_size(Vec2::ZERO, Vec2::ZERO);
        view.set_size(Vec2::new(2.0, 2.0));
        assert!(view.has_area());
        assert!(view.inverse_transform().matrix().iter().all(|v| v.is_finite()));
    }
}
