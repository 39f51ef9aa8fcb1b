//! Drawables submitted to a recording target.

use glam::{IVec2, UVec2, Vec2};
use vellum_core::{FloatRect, IntRect};
use vellum_geometry::Transform;
use vellum_render::{
    BlendMode, CircleShape, Color, ConvexShape, Drawable, PrimitiveType, RectangleShape, RenderStates, RenderTarget, Sprite,
    TextureHandle, Vertex, VertexArray, View,
};
use vellum_test_utils::{RecordedCall, RecordingTarget};

fn texture() -> TextureHandle {
    TextureHandle::new(3, UVec2::new(32, 32))
}

#[test]
fn shape_without_outline_is_one_fan() {
    let mut target = RecordingTarget::new(800, 600);
    let mut rect = RectangleShape::rectangle(Vec2::new(10.0, 20.0));
    rect.set_fill_color(Color::GREEN);
    target.draw_default(&rect);

    let draws = target.draw_calls();
    assert_eq!(draws.len(), 1);
    assert_eq!(draws[0].primitive, PrimitiveType::TriangleFan);
    assert_eq!(draws[0].vertices.len(), 6);
    assert!(draws[0].vertices.iter().all(|v| v.color == Color::GREEN));
}

#[test]
fn shape_outline_drawn_without_texture() {
    let mut target = RecordingTarget::new(800, 600);
    let mut circle = CircleShape::circle(10.0);
    circle.set_texture(Some(texture()), true);
    circle.set_outline_thickness(1.5);
    target.draw_default(&circle);

    let draws = target.draw_calls();
    assert_eq!(draws.len(), 2);
    assert_eq!(draws[0].states.texture, Some(texture()));
    assert_eq!(draws[1].primitive, PrimitiveType::TriangleStrip);
    assert_eq!(draws[1].states.texture, None);
    assert_eq!(draws[1].vertices.len(), 62);
}

#[test]
fn shape_transform_is_applied_after_incoming_states() {
    let mut target = RecordingTarget::new(800, 600);
    let mut rect = RectangleShape::rectangle(Vec2::ONE);
    rect.transformable_mut().set_position(Vec2::new(5.0, 0.0));

    let parent = Transform::IDENTITY.scale(Vec2::splat(2.0));
    let states = RenderStates::from_transform(parent);
    target.draw(&rect, &states);

    let draw = &target.draw_calls()[0];
    assert_eq!(draw.states.transform, parent.combine(&rect.transform()));
    // The corner at local (0, 0) ends up at parent * (5, 0).
    assert_eq!(draw.states.transform.transform_point(Vec2::ZERO), Vec2::new(10.0, 0.0));
}

#[test]
fn degenerate_shape_draws_nothing() {
    let mut target = RecordingTarget::new(800, 600);
    let mut convex = ConvexShape::convex([Vec2::ZERO, Vec2::new(4.0, 0.0)]);
    target.draw_default(&convex);
    assert_eq!(target.count_draws(), 0);

    convex.set_point_count(3);
    target.draw_default(&convex);
    assert_eq!(target.count_draws(), 1);
}

#[test]
fn sprite_draws_textured_strip() {
    let mut target = RecordingTarget::new(800, 600);
    let mut sprite = Sprite::with_texture_rect(texture(), IntRect::new(0, 0, 16, 16));
    sprite.transformable_mut().set_rotation(90.0);
    target.draw(&sprite, &RenderStates::from_blend_mode(BlendMode::ADD));

    let draw = &target.draw_calls()[0];
    assert_eq!(draw.primitive, PrimitiveType::TriangleStrip);
    assert_eq!(draw.vertices.len(), 4);
    assert_eq!(draw.states.blend_mode, BlendMode::ADD);
    assert_eq!(draw.states.texture, Some(texture()));
    assert_eq!(draw.states.transform, sprite.transform());
}

#[test]
fn vertex_array_uses_states_as_given() {
    let mut target = RecordingTarget::new(800, 600);
    let mut array = VertexArray::new(PrimitiveType::Lines);
    array.append(Vertex::with_color(Vec2::ZERO, Color::RED));
    array.append(Vertex::with_color(Vec2::new(4.0, 4.0), Color::RED));

    let states = RenderStates::from_texture(texture());
    array.draw(&mut target, &states);
    VertexArray::new(PrimitiveType::Points).draw(&mut target, &states);

    let calls = target.calls();
    assert_eq!(
        calls,
        vec![RecordedCall::Draw {
            vertices: array.as_slice().to_vec(),
            primitive: PrimitiveType::Lines,
            states,
        }]
    );
}

#[test]
fn clear_is_recorded() {
    let mut target = RecordingTarget::new(10, 10);
    target.clear(Color::MAGENTA);
    assert_eq!(target.calls(), vec![RecordedCall::Clear(Color::MAGENTA)]);
    assert_eq!(target.count_draws(), 0);
}

#[test]
fn pixel_mapping_round_trips_through_custom_view() {
    let mut target = RecordingTarget::new(800, 600);
    let mut view = View::from_rect(FloatRect::new(-400.0, -300.0, 800.0, 600.0));
    view.set_viewport(FloatRect::new(0.0, 0.0, 0.5, 1.0));
    target.set_view(view.clone());

    // Pixel (200, 300) is the centre of the left half, which shows world (0, 0).
    let world = target.map_pixel_to_coords(IVec2::new(200, 300), target.view());
    assert!(world.length() < 1e-3);

    let pixel = target.map_coords_to_pixel(Vec2::new(0.5, 0.5), &view);
    assert_eq!(pixel, IVec2::new(200, 300));
}

#[test]
fn global_bounds_of_rotated_rectangle() {
    let mut rect = RectangleShape::rectangle(Vec2::new(10.0, 10.0));
    rect.transformable_mut().set_origin(Vec2::new(5.0, 5.0));
    rect.transformable_mut().set_rotation(45.0);

    let bounds = rect.global_bounds();
    let half_diagonal = 50f32.sqrt();
    assert!((bounds.x + half_diagonal).abs() < 1e-3);
    assert!((bounds.width - 2.0 * half_diagonal).abs() < 1e-3);
}
