//! Test utilities for Vellum.
//!
//! The main component is [`RecordingTarget`], a [`vellum_render::RenderTarget`]
//! that draws nothing and instead records every clear and draw call so tests
//! can assert on the exact vertices and states a drawable submits.
//!
//! # Example
//!
//! ```rust
//! use glam::Vec2;
//! use vellum_render::{Drawable, RectangleShape, RenderStates};
//! use vellum_test_utils::RecordingTarget;
//!
//! let mut target = RecordingTarget::new(800, 600);
//! let rect = RectangleShape::rectangle(Vec2::new(10.0, 10.0));
//! rect.draw(&mut target, &RenderStates::DEFAULT);
//!
//! assert_eq!(target.count_draws(), 1);
//! ```

mod recording_target;

pub use recording_target::*;
