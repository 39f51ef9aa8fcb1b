//! A render target that records instead of rendering.

use glam::UVec2;
use parking_lot::Mutex;
use vellum_core::profiling::profile_function;
use vellum_render::{Color, PrimitiveType, RenderStates, RenderTarget, Vertex, View};

/// One call received by a [`RecordingTarget`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Clear(Color),
    Draw {
        vertices: Vec<Vertex>,
        primitive: PrimitiveType,
        states: RenderStates,
    },
}

/// The fields of a recorded [`RecordedCall::Draw`].
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub vertices: Vec<Vertex>,
    pub primitive: PrimitiveType,
    pub states: RenderStates,
}

/// Mock render target for testing drawables.
///
/// Recorded calls sit behind a `Mutex` so they can be inspected and cleared
/// through `&self` while the target is still borrowed elsewhere in a test.
pub struct RecordingTarget {
    size: UVec2,
    view: View,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingTarget {
    /// A target of `width` x `height` pixels using its default view.
    pub fn new(width: u32, height: u32) -> Self {
        let mut target = Self {
            size: UVec2::new(width, height),
            view: View::new(),
            calls: Mutex::new(Vec::new()),
        };
        target.view = target.default_view();
        target
    }

    /// Resize the target. The current view is left unchanged.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.size = UVec2::new(width, height);
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    /// Only the draw calls, in submission order.
    pub fn draw_calls(&self) -> Vec<DrawCall> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                RecordedCall::Draw {
                    vertices,
                    primitive,
                    states,
                } => Some(DrawCall {
                    vertices: vertices.clone(),
                    primitive: *primitive,
                    states: *states,
                }),
                RecordedCall::Clear(_) => None,
            })
            .collect()
    }

    pub fn count_draws(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, RecordedCall::Draw { .. }))
            .count()
    }

    pub fn count_clears(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, RecordedCall::Clear(_)))
            .count()
    }

    /// Forget recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }
}

impl Default for RecordingTarget {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl RenderTarget for RecordingTarget {
    fn size(&self) -> UVec2 {
        self.size
    }

    fn view(&self) -> &View {
        &self.view
    }

    fn set_view(&mut self, view: View) {
        self.view = view;
    }

    fn clear(&mut self, color: Color) {
        self.calls.lock().push(RecordedCall::Clear(color));
    }

    fn draw_primitives(&mut self, vertices: &[Vertex], primitive: PrimitiveType, states: &RenderStates) {
        profile_function!();
        self.calls.lock().push(RecordedCall::Draw {
            vertices: vertices.to_vec(),
            primitive,
            states: *states,
        });
    }
}
