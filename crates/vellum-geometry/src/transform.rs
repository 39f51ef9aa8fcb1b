//! 2D affine transformations.
//!
//! [`Transform`] is a 3x3 matrix stored row-major as nine consecutive `f32`s,
//! the exact layout the native renderer expects.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Vec2};
use vellum_core::FloatRect;
use vellum_core::math::to_radians;

use crate::MutableTransform;

/// An immutable 3x3 transform matrix.
///
/// Every operation returns a new transform. Transforms built through this API
/// are affine: the last row is always `[0, 0, 1]`.
///
/// Composition follows the scene-graph convention: `a.combine(&b)` applies
/// `b` first, then `a`. Chaining `translate`, `rotate` and `scale` therefore
/// applies the last call first to a point.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Transform {
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

static_assertions::assert_eq_size!(Transform, [f32; 9]);
static_assertions::assert_eq_align!(Transform, f32);

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Identity transform (no transformation).
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

    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        let [[a00, a01, a02], [a10, a11, a12], [a20, a21, a22]] = rows;
        Self::new(a00, a01, a02, a10, a11, a12, a20, a21, a22)
    }

    pub const fn to_rows(&self) -> [[f32; 3]; 3] {
        [
            [self.m00, self.m01, self.m02],
            [self.m10, self.m11, self.m12],
            [self.m20, self.m21, self.m22],
        ]
    }

    /// The nine elements in row-major order, as sent to the native library.
    pub const fn matrix(&self) -> [f32; 9] {
        [
            self.m00, self.m01, self.m02, self.m10, self.m11, self.m12, self.m20, self.m21, self.m22,
        ]
    }

    /// Create from a glam matrix (column-major).
    pub fn from_mat3(matrix: Mat3) -> Self {
        Self::from_rows(matrix.transpose().to_cols_array_2d())
    }

    /// Convert to a glam matrix (column-major).
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_cols_array_2d(&self.to_rows()).transpose()
    }

    // =========================================================================
    // Elementary transforms (angles in degrees)
    // =========================================================================

    /// A translation by `offset`.
    pub const fn translation(offset: Vec2) -> Self {
        Self::new(1.0, 0.0, offset.x, 0.0, 1.0, offset.y, 0.0, 0.0, 1.0)
    }

    /// A rotation about the origin.
    pub fn rotation(angle: f32) -> Self {
        let (sin, cos) = to_radians(angle).sin_cos();
        Self::new(cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0)
    }

    /// A rotation about `center`.
    ///
    /// Equivalent to translating by `-center`, rotating, then translating
    /// back, but computed in one step.
    pub fn rotation_around(angle: f32, center: Vec2) -> Self {
        let (sin, cos) = to_radians(angle).sin_cos();
        Self::new(
            cos,
            -sin,
            center.x * (1.0 - cos) + center.y * sin,
            sin,
            cos,
            center.y * (1.0 - cos) - center.x * sin,
            0.0,
            0.0,
            1.0,
        )
    }

    /// A non-uniform scale about the origin.
    pub const fn scaling(factors: Vec2) -> Self {
        Self::new(factors.x, 0.0, 0.0, 0.0, factors.y, 0.0, 0.0, 0.0, 1.0)
    }

    /// A non-uniform scale about `center`.
    pub fn scaling_around(factors: Vec2, center: Vec2) -> Self {
        Self::new(
            factors.x,
            0.0,
            center.x * (1.0 - factors.x),
            0.0,
            factors.y,
            center.y * (1.0 - factors.y),
            0.0,
            0.0,
            1.0,
        )
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Combine with another transform (matrix product `self * other`).
    pub fn combine(&self, other: &Transform) -> Self {
        Self::from_mat3(self.to_mat3() * other.to_mat3())
    }

    pub fn translate(&self, offset: Vec2) -> Self {
        self.combine(&Self::translation(offset))
    }

    pub fn rotate(&self, angle: f32) -> Self {
        self.combine(&Self::rotation(angle))
    }

    pub fn rotate_around(&self, angle: f32, center: Vec2) -> Self {
        self.combine(&Self::rotation_around(angle, center))
    }

    pub fn scale(&self, factors: Vec2) -> Self {
        self.combine(&Self::scaling(factors))
    }

    pub fn scale_around(&self, factors: Vec2, center: Vec2) -> Self {
        self.combine(&Self::scaling_around(factors, center))
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Transform a point.
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            self.m00 * point.x + self.m01 * point.y + self.m02,
            self.m10 * point.x + self.m11 * point.y + self.m12,
        )
    }

    /// Transform a rectangle.
    ///
    /// The result is the axis-aligned bounding box of the four transformed
    /// corners, so a rotated rectangle comes back larger than it went in.
    pub fn transform_rect(&self, rect: FloatRect) -> FloatRect {
        let (left, top) = (rect.x, rect.y);
        let (right, bottom) = (rect.x + rect.width, rect.y + rect.height);
        FloatRect::from_points([
            self.transform_point(Vec2::new(left, top)),
            self.transform_point(Vec2::new(left, bottom)),
            self.transform_point(Vec2::new(right, top)),
            self.transform_point(Vec2::new(right, bottom)),
        ])
    }

    pub fn determinant(&self) -> f32 {
        self.to_mat3().determinant()
    }

    /// Get the inverse transform.
    ///
    /// A singular matrix has no inverse; [`Transform::IDENTITY`] is returned
    /// in that case.
    pub fn inverse(&self) -> Self {
        let matrix = self.to_mat3();
        if matrix.determinant() == 0.0 {
            tracing::warn!("inverting a singular transform, falling back to identity");
            return Self::IDENTITY;
        }
        Self::from_mat3(matrix.inverse())
    }

    /// Reinterpret as a [`MutableTransform`] with the same nine elements.
    pub fn to_mutable(self) -> MutableTransform {
        bytemuck::cast(self)
    }
}

impl std::ops::Mul<Transform> for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        self.combine(&rhs)
    }
}

impl std::ops::Mul<Vec2> for Transform {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        self.transform_point(rhs)
    }
}

impl From<MutableTransform> for Transform {
    fn from(m: MutableTransform) -> Self {
        m.to_transform()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix(f, "Transform", &self.matrix())
    }
}

pub(crate) fn write_matrix(f: &mut fmt::Formatter<'_>, kind: &str, m: &[f32; 9]) -> fmt::Result {
    write!(
        f,
        "[{}] Matrix({}, {}, {}, {}, {}, {}, {}, {}, {})",
        kind, m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], m[8]
    )
}
