//! Vellum Render - drawables and the render target seam
//!
//! This crate turns shapes and sprites into vertices plus [`RenderStates`],
//! and hands them to a [`RenderTarget`]. It never touches the GPU itself:
//! a backend implements [`RenderTarget::draw_primitives`] and everything
//! else (view mapping, transform folding, tessellation) happens here.
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use vellum_render::{CircleShape, Color};
//!
//! let mut circle = CircleShape::circle(20.0);
//! circle.set_fill_color(Color::YELLOW);
//! circle.set_outline_thickness(2.0);
//! circle.transformable_mut().set_position(Vec2::new(100.0, 100.0));
//!
//! let bounds = circle.global_bounds();
//! assert!(bounds.x < 100.0 && bounds.y < 100.0);
//! ```

mod blend;
mod color;
mod shape;
mod shapes;
mod sprite;
mod states;
mod target;
mod vertex;
mod vertex_array;
mod view;

pub use blend::*;
pub use color::*;
pub use shape::*;
pub use shapes::*;
pub use sprite::*;
pub use states::*;
pub use target::*;
pub use vertex::*;
pub use vertex_array::*;
pub use view::*;
