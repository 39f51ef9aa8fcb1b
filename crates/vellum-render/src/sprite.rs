//! Textured rectangles.
//!
//! A [`Sprite`] is the cheapest way to put (part of) a texture on screen: four
//! vertices drawn as a triangle strip, positioned by its own
//! [`Transformable`].
//!
//! ```
//! use glam::{UVec2, Vec2};
//! use vellum_core::IntRect;
//! use vellum_render::{Sprite, TextureHandle};
//!
//! let texture = TextureHandle::new(1, UVec2::new(256, 128));
//! let mut sprite = Sprite::new(texture);
//! sprite.set_texture_rect(IntRect::new(32, 0, 32, 32));
//! sprite.transformable_mut().set_position(Vec2::new(10.0, 10.0));
//!
//! assert_eq!(sprite.global_bounds().width, 32.0);
//! ```

use glam::Vec2;
use vellum_core::{FloatRect, IntRect};
use vellum_geometry::{Transform, Transformable};

use crate::{Color, Drawable, PrimitiveType, RenderStates, RenderTarget, TextureHandle, Vertex};

#[derive(Debug, Clone)]
pub struct Sprite {
    transformable: Transformable,
    texture: TextureHandle,
    texture_rect: IntRect,
    vertices: [Vertex; 4],
}

impl Sprite {
    /// A sprite showing the whole texture.
    pub fn new(texture: TextureHandle) -> Self {
        let size = texture.size.as_ivec2();
        Self::with_texture_rect(texture, IntRect::new(0, 0, size.x, size.y))
    }

    /// A sprite showing the `rect` sub-region of the texture.
    pub fn with_texture_rect(texture: TextureHandle, rect: IntRect) -> Self {
        let mut sprite = Self {
            transformable: Transformable::new(),
            texture,
            texture_rect: rect,
            vertices: [Vertex::default(); 4],
        };
        sprite.update_positions();
        sprite.update_tex_coords();
        sprite
    }

    pub fn transformable(&self) -> &Transformable {
        &self.transformable
    }

    pub fn transformable_mut(&mut self) -> &mut Transformable {
        &mut self.transformable
    }

    pub fn transform(&self) -> Transform {
        self.transformable.transform()
    }

    pub fn inverse_transform(&self) -> Transform {
        self.transformable.inverse_transform()
    }

    pub fn texture(&self) -> TextureHandle {
        self.texture
    }

    /// Swap the texture, optionally resetting the rect to cover all of it.
    pub fn set_texture(&mut self, texture: TextureHandle, reset_rect: bool) {
        self.texture = texture;
        if reset_rect {
            let size = texture.size.as_ivec2();
            self.set_texture_rect(IntRect::new(0, 0, size.x, size.y));
        }
    }

    pub fn texture_rect(&self) -> IntRect {
        self.texture_rect
    }

    /// Negative width or height flips the texture on that axis.
    pub fn set_texture_rect(&mut self, rect: IntRect) {
        if rect != self.texture_rect {
            self.texture_rect = rect;
            self.update_positions();
            self.update_tex_coords();
        }
    }

    /// Tint multiplied with the texture.
    pub fn color(&self) -> Color {
        self.vertices[0].color
    }

    pub fn set_color(&mut self, color: Color) {
        for vertex in &mut self.vertices {
            vertex.color = color;
        }
    }

    pub fn local_bounds(&self) -> FloatRect {
        let width = self.texture_rect.width.unsigned_abs() as f32;
        let height = self.texture_rect.height.unsigned_abs() as f32;
        FloatRect::new(0.0, 0.0, width, height)
    }

    pub fn global_bounds(&self) -> FloatRect {
        self.transform().transform_rect(self.local_bounds())
    }

    pub fn vertices(&self) -> &[Vertex; 4] {
        &self.vertices
    }

    fn update_positions(&mut self) {
        let bounds = self.local_bounds();
        self.vertices[0].position = Vec2::ZERO;
        self.vertices[1].position = Vec2::new(0.0, bounds.height);
        self.vertices[2].position = Vec2::new(bounds.width, 0.0);
        self.vertices[3].position = Vec2::new(bounds.width, bounds.height);
    }

    fn update_tex_coords(&mut self) {
        let rect = FloatRect::from(self.texture_rect);
        let left = rect.x;
        let right = left + rect.width;
        let top = rect.y;
        let bottom = top + rect.height;

        self.vertices[0].tex_coords = Vec2::new(left, top);
        self.vertices[1].tex_coords = Vec2::new(left, bottom);
        self.vertices[2].tex_coords = Vec2::new(right, top);
        self.vertices[3].tex_coords = Vec2::new(right, bottom);
    }
}

impl Drawable for Sprite {
    fn draw(&self, target: &mut dyn RenderTarget, states: &RenderStates) {
        let states = states
            .with_applied_transform(&self.transform())
            .with_texture(Some(self.texture));
        target.draw_primitives(&self.vertices, PrimitiveType::TriangleStrip, &states);
    }
}
