//! Vellum Geometry - 2D affine transforms
//!
//! This crate provides:
//! - [`Transform`]: an immutable 3x3 matrix with the native renderer's layout
//! - [`MutableTransform`]: the same matrix, composed in place
//! - [`Transformable`]: position/rotation/scale/origin with a lazily derived matrix
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use vellum_geometry::Transformable;
//!
//! let mut sprite = Transformable::new();
//! sprite.set_position(Vec2::new(100.0, 50.0));
//! sprite.set_scale(Vec2::splat(2.0));
//!
//! let world = sprite.transform().transform_point(Vec2::new(1.0, 0.0));
//! assert_eq!(world, Vec2::new(102.0, 50.0));
//! ```

mod mutable_transform;
mod transform;
mod transformable;

pub use mutable_transform::*;
pub use transform::*;
pub use transformable::*;
