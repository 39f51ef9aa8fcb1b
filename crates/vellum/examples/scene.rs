//! Scene Example - shapes, a sprite and a camera
//!
//! Builds a small scene, draws it into a recording target and logs what a
//! native backend would have received.
//!
//! Run with: cargo run -p vellum --example scene
//! Set `RUST_LOG=trace` to watch transforms and shapes being rebuilt.

use vellum::prelude::*;
use vellum_test_utils::RecordingTarget;

fn main() {
    Config::default().apply();

    let mut target = RecordingTarget::new(800, 600);

    let mut sun = CircleShape::circle(40.0);
    sun.set_fill_color(Color::YELLOW);
    sun.set_outline_thickness(4.0);
    sun.set_outline_color(Color::from_hex(0xFF8800));
    sun.transformable_mut().set_origin(Vec2::splat(40.0));
    sun.transformable_mut().set_position(Vec2::new(400.0, 300.0));

    let mut ground = RectangleShape::rectangle(Vec2::new(800.0, 100.0));
    ground.set_fill_color(Color::GREEN);
    ground.transformable_mut().set_position(Vec2::new(0.0, 500.0));

    let mut player = Sprite::new(TextureHandle::new(1, UVec2::new(32, 48)));
    player.transformable_mut().set_position(Vec2::new(120.0, 452.0));

    let mut camera = target.default_view();
    camera.zoom(1.25);
    camera.rotate_by(5.0);
    target.set_view(camera);

    for frame in 0..3 {
        vellum::core::profiling::new_frame();

        target.clear(Color::BLACK);
        target.draw_default(&ground);
        target.draw_default(&sun);
        target.draw_default(&player);

        player.transformable_mut().move_by(Vec2::new(8.0, 0.0));
        sun.transformable_mut().rotate_by(15.0);

        let vertices: usize = target.draw_calls().iter().map(|call| call.vertices.len()).sum();
        tracing::info!(frame, draws = target.count_draws(), vertices, "frame submitted");
        target.clear_calls();
    }

    let view = target.view().clone();
    let under_cursor = target.map_pixel_to_coords(IVec2::new(400, 300), &view);
    tracing::info!(?under_cursor, sun = ?sun.global_bounds(), "scene done");
}
