//! Vellum Core
//!
//! Shared plumbing for the Vellum crates: logging and profiling setup,
//! configuration, math re-exports, rectangles, and native library discovery.

pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod native;
pub mod profiling;

pub use config::Config;
pub use geometry::{FloatRect, IntRect, Rect};
