//! In-place transform composition.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::Transform;
use crate::transform::write_matrix;

/// A 3x3 transform matrix that is composed in place.
///
/// Shares the exact memory layout of [`Transform`]; converting between the
/// two is a bit-for-bit reinterpretation via [`bytemuck::cast`].
///
/// ```
/// use glam::Vec2;
/// use vellum_geometry::MutableTransform;
///
/// let mut m = MutableTransform::IDENTITY;
/// m.translate(Vec2::new(10.0, 0.0)).scale(Vec2::splat(2.0));
/// let t = m.to_transform();
/// assert_eq!(t.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(12.0, 2.0));
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MutableTransform {
    m00: f32,
    m01: f32,
    m02: f32,
    m10: f32,
    m11: f32,
    m12: f32,
    m20: f32,
    m21: f32,
    m22: f32,
}

static_assertions::assert_eq_size!(MutableTransform, Transform);
static_assertions::assert_eq_align!(MutableTransform, Transform);

/// Anything that can be viewed as a [`Transform`] without copying.
///
/// Lets [`MutableTransform::combine`] accept either transform type.
pub trait AsTransform {
    fn as_transform(&self) -> &Transform;
}

impl AsTransform for Transform {
    fn as_transform(&self) -> &Transform {
        self
    }
}

impl AsTransform for MutableTransform {
    fn as_transform(&self) -> &Transform {
        bytemuck::cast_ref(self)
    }
}

impl Default for MutableTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl MutableTransform {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);

    /// Create from the nine matrix elements, row by row.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        a00: f32,
        a01: f32,
        a02: f32,
        a10: f32,
        a11: f32,
        a12: f32,
        a20: f32,
        a21: f32,
        a22: f32,
    ) -> Self {
        Self {
            m00: a00,
            m01: a01,
            m02: a02,
            m10: a10,
            m11: a11,
            m12: a12,
            m20: a20,
            m21: a21,
            m22: a22,
        }
    }

    /// Reinterpret as an immutable [`Transform`].
    pub fn to_transform(self) -> Transform {
        bytemuck::cast(self)
    }

    pub fn matrix(&self) -> [f32; 9] {
        self.as_transform().matrix()
    }

    /// Combine in place with `other` (this followed by `other`'s local frame).
    pub fn combine(&mut self, other: &impl AsTransform) -> &mut Self {
        *self = self.as_transform().combine(other.as_transform()).to_mutable();
        self
    }

    pub fn translate(&mut self, offset: Vec2) -> &mut Self {
        self.combine(&Transform::translation(offset))
    }

    pub fn rotate(&mut self, angle: f32) -> &mut Self {
        self.combine(&Transform::rotation(angle))
    }

    pub fn rotate_around(&mut self, angle: f32, center: Vec2) -> &mut Self {
        self.combine(&Transform::rotation_around(angle, center))
    }

    pub fn scale(&mut self, factors: Vec2) -> &mut Self {
        self.combine(&Transform::scaling(factors))
    }

    pub fn scale_around(&mut self, factors: Vec2, center: Vec2) -> &mut Self {
        self.combine(&Transform::scaling_around(factors, center))
    }
}

impl From<Transform> for MutableTransform {
    fn from(t: Transform) -> Self {
        t.to_mutable()
    }
}

impl fmt::Display for MutableTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix(f, "MutableTransform", &self.matrix())
    }
}
