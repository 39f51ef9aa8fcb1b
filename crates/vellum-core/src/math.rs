/// SIMD-friendly math types from the [`glam`] crate.
///
/// These are what the rest of Vellum computes with: [`Vec2`] for points,
/// offsets and scale factors, [`IVec2`]/[`UVec2`] for pixel coordinates and
/// sizes, [`Mat3`] for 3x3 matrix products.
///
/// ```
/// use vellum_core::math::Vec2;
///
/// let position = Vec2::new(10.0, 20.0);
/// let velocity = Vec2::new(1.0, 0.5);
/// let next = position + velocity * 2.0;
/// assert_eq!(next, Vec2::new(12.0, 21.0));
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

/// Vector types with a guaranteed `#[repr(C)]` layout for the native boundary.
///
/// The native library exchanges 2D vectors as two consecutive `f32`s. These
/// types are [`Pod`](bytemuck::Pod) and can be cast to bytes or reinterpreted
/// in place with [`bytemuck`].
///
/// ```
/// use vellum_core::math::{PackedVec2, Vec2};
///
/// let packed: PackedVec2 = Vec2::new(3.0, 4.0).into();
/// let bytes: &[u8] = bytemuck::bytes_of(&packed);
/// assert_eq!(bytes.len(), 8);
/// ```
pub mod packed {
    use bytemuck::{Pod, Zeroable};

    /// A 2D `f32` vector.
    ///
    /// ```text
    /// Offset | Field | Size
    /// -------|-------|------
    /// 0      | x     | 4 bytes (f32)
    /// 4      | y     | 4 bytes (f32)
    /// Total: 8 bytes
    /// ```
    #[repr(C)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
    pub struct Vec2 {
        pub x: f32,
        pub y: f32,
    }

    /// A 2D `i32` vector, used for pixel coordinates.
    #[repr(C)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
    pub struct IVec2 {
        pub x: i32,
        pub y: i32,
    }

    impl From<glam::Vec2> for Vec2 {
        fn from(v: glam::Vec2) -> Self {
            Self { x: v.x, y: v.y }
        }
    }

    impl From<Vec2> for glam::Vec2 {
        fn from(v: Vec2) -> Self {
            glam::Vec2::new(v.x, v.y)
        }
    }

    impl From<mint::Vector2<f32>> for Vec2 {
        fn from(v: mint::Vector2<f32>) -> Self {
            Self { x: v.x, y: v.y }
        }
    }

    impl From<Vec2> for mint::Vector2<f32> {
        fn from(v: Vec2) -> Self {
            mint::Vector2 { x: v.x, y: v.y }
        }
    }

    impl From<glam::IVec2> for IVec2 {
        fn from(v: glam::IVec2) -> Self {
            Self { x: v.x, y: v.y }
        }
    }

    impl From<IVec2> for glam::IVec2 {
        fn from(v: IVec2) -> Self {
            glam::IVec2::new(v.x, v.y)
        }
    }

    static_assertions::assert_eq_size!(Vec2, [f32; 2]);
    static_assertions::assert_eq_size!(IVec2, [i32; 2]);
}

pub use fast::*;
pub use packed::{IVec2 as PackedIVec2, Vec2 as PackedVec2};

/// Convert degrees to radians with the single-precision pi the native
/// library uses, so results match it bit for bit.
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * 3.141_592_654 / 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_round_trip_through_mint() {
        let v = PackedVec2 { x: 1.5, y: -2.0 };
        let m: mint::Vector2<f32> = v.into();
        assert_eq!(PackedVec2::from(m), v);
        assert_eq!(Vec2::from(v), Vec2::new(1.5, -2.0));
    }

    #[test]
    fn test_to_radians() {
        assert!((to_radians(180.0) - std::f32::consts::PI).abs() < 1e-6);
        assert_eq!(to_radians(0.0), 0.0);
    }
}
