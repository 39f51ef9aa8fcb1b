//! Vellum - 2D transforms and drawables
//!
//! Vellum is the safe, typed side of a binding to a native 2D multimedia
//! library. It provides:
//!
//! - **Transforms**: 3x3 affine matrices, composed immutably or in place
//! - **Transformables**: position/rotation/scale/origin with a lazily derived matrix
//! - **Drawables**: shapes, sprites and vertex arrays submitted to a `RenderTarget`
//! - **Native plumbing**: library naming and one-time load guards
//!
//! # Quick Start
//!
//! ```
//! use vellum::prelude::*;
//!
//! let mut node = Transformable::new();
//! node.set_origin(Vec2::new(5.0, 5.0));
//! node.set_position(Vec2::new(100.0, 100.0));
//! node.set_rotation(90.0);
//!
//! let pivot = node.transform().transform_point(Vec2::new(5.0, 5.0));
//! assert!((pivot - Vec2::new(100.0, 100.0)).length() < 1e-4);
//! ```
//!
//! # Features
//!
//! - `render` (default) - drawables, views and the `RenderTarget` seam

pub use vellum_core as core;
pub use vellum_core::math;
pub use vellum_geometry as geometry;

#[cfg(feature = "render")]
pub use vellum_render as render;

pub use vellum_core::Config;
pub use vellum_geometry::{MutableTransform, Transform, Transformable};

/// Prelude module for convenient imports
pub mod prelude {
    pub use vellum_core::Config;
    pub use vellum_core::{FloatRect, IntRect};

    // Core math types
    pub use vellum_core::math::{IVec2, UVec2, Vec2};

    // Transform types
    pub use vellum_geometry::{AsTransform, MutableTransform, Transform, Transformable};

    // Render types
    #[cfg(feature = "render")]
    pub use vellum_render::{
        BlendMode, CircleShape, Color, ConvexShape, Drawable, PrimitiveType, RectangleShape, RenderStates,
        RenderTarget, Sprite, TextureHandle, Vertex, VertexArray, View,
    };
}
