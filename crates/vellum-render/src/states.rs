//! Render states: everything besides vertices that a draw call needs.

use glam::UVec2;
use vellum_geometry::Transform;

use crate::BlendMode;

/// Opaque reference to a texture owned by the native renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle {
    /// Native identifier; never 0.
    pub id: u64,
    /// Size in pixels.
    pub size: UVec2,
}

/// Opaque reference to a shader owned by the native renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle {
    /// Native identifier; never 0.
    pub id: u64,
}

impl TextureHandle {
    pub const fn new(id: u64, size: UVec2) -> Self {
        Self { id, size }
    }
}

impl ShaderHandle {
    pub const fn new(id: u64) -> Self {
        Self { id }
    }
}

/// Blend mode, transform, texture and shader applied to a draw call.
///
/// States are immutable values; the `with_*` methods return modified copies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStates {
    pub blend_mode: BlendMode,
    pub transform: Transform,
    pub texture: Option<TextureHandle>,
    pub shader: Option<ShaderHandle>,
}

impl Default for RenderStates {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl RenderStates {
    /// Alpha blending, identity transform, no texture, no shader.
    pub const DEFAULT: RenderStates = RenderStates {
        blend_mode: BlendMode::ALPHA,
        transform: Transform::IDENTITY,
        texture: None,
        shader: None,
    };

    pub const fn new(
        blend_mode: BlendMode,
        transform: Transform,
        texture: Option<TextureHandle>,
        shader: Option<ShaderHandle>,
    ) -> Self {
        Self {
            blend_mode,
            transform,
            texture,
            shader,
        }
    }

    pub const fn from_blend_mode(blend_mode: BlendMode) -> Self {
        Self::new(blend_mode, Transform::IDENTITY, None, None)
    }

    pub const fn from_transform(transform: Transform) -> Self {
        Self::new(BlendMode::ALPHA, transform, None, None)
    }

    pub const fn from_texture(texture: TextureHandle) -> Self {
        Self::new(BlendMode::ALPHA, Transform::IDENTITY, Some(texture), None)
    }

    pub const fn from_shader(shader: ShaderHandle) -> Self {
        Self::new(BlendMode::ALPHA, Transform::IDENTITY, None, Some(shader))
    }

    pub fn with_shader(self, shader: Option<ShaderHandle>) -> Self {
        Self { shader, ..self }
    }

    pub fn with_texture(self, texture: Option<TextureHandle>) -> Self {
        Self { texture, ..self }
    }

    /// Replace the transform.
    pub fn with_new_transform(self, transform: Transform) -> Self {
        Self { transform, ..self }
    }

    /// Combine `transform` into the current one, as a child in a scene graph.
    pub fn with_applied_transform(self, transform: &Transform) -> Self {
        Self {
            transform: self.transform.combine(transform),
            ..self
        }
    }

    /// Layout handed to the native draw calls.
    pub fn marshal(&self) -> MarshalledStates {
        MarshalledStates {
            blend_mode: self.blend_mode,
            transform: self.transform,
            texture: self.texture.map_or(0, |t| t.id),
            shader: self.shader.map_or(0, |s| s.id),
        }
    }
}

/// `#[repr(C)]` render states as the native renderer reads them.
///
/// Missing textures and shaders are encoded as 0.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarshalledStates {
    pub blend_mode: BlendMode,
    pub transform: Transform,
    pub texture: u64,
    pub shader: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_applied_transform_is_parent_then_child() {
        let parent = RenderStates::from_transform(Transform::translation(Vec2::new(10.0, 0.0)));
        let child = Transform::scaling(Vec2::splat(2.0));
        let states = parent.with_applied_transform(&child);
        assert_eq!(states.transform.transform_point(Vec2::ONE), Vec2::new(12.0, 2.0));
    }

    #[test]
    fn test_with_methods_keep_other_fields() {
        let texture = TextureHandle {
            id: 7,
            size: UVec2::new(4, 4),
        };
        let states = RenderStates::from_blend_mode(BlendMode::ADD)
            .with_texture(Some(texture))
            .with_shader(Some(ShaderHandle { id: 9 }));

        assert_eq!(states.blend_mode, BlendMode::ADD);
        assert_eq!(states.texture, Some(texture));
        assert_eq!(states.with_new_transform(Transform::IDENTITY).shader, Some(ShaderHandle { id: 9 }));
    }

    #[test]
    fn test_marshal_encodes_missing_handles_as_zero() {
        let marshalled = RenderStates::DEFAULT.marshal();
        assert_eq!(marshalled.texture, 0);
        assert_eq!(marshalled.shader, 0);
        assert_eq!(marshalled.transform, Transform::IDENTITY);
    }
}
