//! Profiling utilities based on the `puffin` crate.

use std::sync::OnceLock;

pub use puffin::{GlobalProfiler, profile_function, profile_scope};

/// Profiling backend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingBackend {
    /// Send profiling data to puffin_viewer via HTTP.
    PuffinHttp,
}

/// Address the puffin HTTP server binds to.
pub const PUFFIN_HTTP_ADDR: &str = "0.0.0.0:8585";

static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

/// Initialize profiling with the specified backend.
///
/// # Example
/// ```no_run
/// use vellum_core::profiling::{init_profiling, ProfilingBackend};
///
/// init_profiling(ProfilingBackend::PuffinHttp);
/// ```
pub fn init_profiling(backend: ProfilingBackend) {
    match backend {
        ProfilingBackend::PuffinHttp => {
            puffin::set_scopes_on(true);

            if PROFILING_SERVER.get().is_some() {
                return;
            }

            match puffin_http::Server::new(PUFFIN_HTTP_ADDR) {
                Ok(server) => {
                    tracing::info!("Puffin profiler server started on http://{}", PUFFIN_HTTP_ADDR);
                    let _ = PROFILING_SERVER.set(server);
                }
                Err(e) => {
                    tracing::error!("Failed to start puffin server: {}", e);
                }
            }
        }
    }
}

/// Mark the start of a new frame for profiling.
///
/// Call this once per frame in your main loop to organize profiling data by frame.
///
/// ```
/// use vellum_core::profiling::{new_frame, profile_scope};
///
/// puffin::set_scopes_on(true);
/// for _ in 0..3 {
///     new_frame();
///     profile_scope!("tessellate");
/// }
/// puffin::set_scopes_on(false);
/// ```
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}
