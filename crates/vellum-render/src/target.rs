//! The seam between drawables and whatever actually puts pixels on screen.

use glam::{IVec2, UVec2, Vec2};
use vellum_core::{FloatRect, IntRect};

use crate::{Color, PrimitiveType, RenderStates, Vertex, View};

/// Something that can submit itself to a [`RenderTarget`].
///
/// Implementors push their vertices through
/// [`RenderTarget::draw_primitives`], usually after folding their own
/// transform into `states`.
pub trait Drawable {
    fn draw(&self, target: &mut dyn RenderTarget, states: &RenderStates);
}

/// A surface that accepts primitives: a window, an offscreen texture, or a
/// recorder in tests.
///
/// Backends supply the five required methods; view mapping and drawable
/// dispatch are provided on top of them.
pub trait RenderTarget {
    /// Size of the rendering region in pixels.
    fn size(&self) -> UVec2;

    /// The view currently used for drawing.
    fn view(&self) -> &View;

    fn set_view(&mut self, view: View);

    /// Fill the whole target with `color`.
    fn clear(&mut self, color: Color);

    /// Submit raw vertices. This is the only entry point that reaches the backend.
    fn draw_primitives(&mut self, vertices: &[Vertex], primitive: PrimitiveType, states: &RenderStates);

    /// A view covering the whole target, one world unit per pixel.
    fn default_view(&self) -> View {
        let size = self.size().as_vec2();
        View::from_rect(FloatRect::new(0.0, 0.0, size.x, size.y))
    }

    fn draw(&mut self, drawable: &dyn Drawable, states: &RenderStates)
    where
        Self: Sized,
    {
        drawable.draw(self, states);
    }

    /// Draw with [`RenderStates::DEFAULT`].
    fn draw_default(&mut self, drawable: &dyn Drawable)
    where
        Self: Sized,
    {
        drawable.draw(self, &RenderStates::DEFAULT);
    }

    /// Pixel rectangle covered by `view`'s viewport on this target.
    fn viewport(&self, view: &View) -> IntRect {
        let size = self.size().as_vec2();
        let vp = view.viewport();
        IntRect::new(
            (0.5 + size.x * vp.x) as i32,
            (0.5 + size.y * vp.y) as i32,
            (0.5 + size.x * vp.width) as i32,
            (0.5 + size.y * vp.height) as i32,
        )
    }

    /// Convert a pixel position to world coordinates through `view`.
    fn map_pixel_to_coords(&self, point: IVec2, view: &View) -> Vec2 {
        let viewport = FloatRect::from(self.viewport(view));
        let normalized = Vec2::new(
            -1.0 + 2.0 * (point.x as f32 - viewport.x) / viewport.width,
            1.0 - 2.0 * (point.y as f32 - viewport.y) / viewport.height,
        );
        view.inverse_transform().transform_point(normalized)
    }

    /// Convert world coordinates to a pixel position through `view`.
    fn map_coords_to_pixel(&self, point: Vec2, view: &View) -> IVec2 {
        let normalized = view.transform().transform_point(point);
        let viewport = FloatRect::from(self.viewport(view));
        IVec2::new(
            ((normalized.x + 1.0) / 2.0 * viewport.width + viewport.x) as i32,
            ((-normalized.y + 1.0) / 2.0 * viewport.height + viewport.y) as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullTarget {
        size: UVec2,
        view: View,
    }

    impl NullTarget {
        fn new(width: u32, height: u32) -> Self {
            let mut target = Self {
                size: UVec2::new(width, height),
                view: View::new(),
            };
            target.view = target.default_view();
            target
        }
    }

    impl RenderTarget for NullTarget {
        fn size(&self) -> UVec2 {
            self.size
        }

        fn view(&self) -> &View {
            &self.view
        }

        fn set_view(&mut self, view: View) {
            self.view = view;
        }

        fn clear(&mut self, _color: Color) {}

        fn draw_primitives(&mut self, _vertices: &[Vertex], _primitive: PrimitiveType, _states: &RenderStates) {}
    }

    #[test]
    fn test_default_view_covers_target() {
        let target = NullTarget::new(800, 600);
        let view = target.default_view();
        assert_eq!(view.center(), Vec2::new(400.0, 300.0));
        assert_eq!(view.size(), Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_viewport_rounds_to_pixels() {
        let target = NullTarget::new(801, 600);
        let mut view = target.default_view();
        view.set_viewport(FloatRect::new(0.5, 0.0, 0.5, 0.5));
        assert_eq!(target.viewport(&view), IntRect::new(401, 0, 401, 300));
    }

    #[test]
    fn test_pixel_mapping_with_default_view() {
        let target = NullTarget::new(800, 600);
        let view = target.view().clone();

        let world = target.map_pixel_to_coords(IVec2::new(200, 150), &view);
        assert!((world - Vec2::new(200.0, 150.0)).length() < 1e-3);
        assert_eq!(target.map_coords_to_pixel(Vec2::new(200.5, 150.5), &view), IVec2::new(200, 150));
    }

    #[test]
    fn test_pixel_mapping_through_zoomed_view() {
        let target = NullTarget::new(800, 600);
        let mut view = target.default_view();
        view.zoom(2.0);

        // The top-left pixel now sees further out.
        let world = target.map_pixel_to_coords(IVec2::ZERO, &view);
        assert!((world - Vec2::new(-400.0, -300.0)).length() < 1e-3);
        assert_eq!(target.map_coords_to_pixel(world, &view), IVec2::ZERO);
    }
}
