use crate::logging;
use crate::profiling::{self, ProfilingBackend};

/// Configuration for the Vellum bindings.
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing` filter directives, e.g. `"info,vellum_render=trace"`.
    pub log_filter: String,
    pub profiling: ProfilingMode,
    pub library: LibraryNaming,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: logging::DEFAULT_FILTER.to_string(),
            profiling: ProfilingMode::Off,
            library: LibraryNaming::default(),
        }
    }
}

impl Config {
    /// Install logging and start profiling according to this configuration.
    pub fn apply(&self) {
        logging::init_with_filter(&self.log_filter);
        match self.profiling {
            ProfilingMode::Off => {}
            ProfilingMode::On => puffin::set_scopes_on(true),
            ProfilingMode::WithWebServer => profiling::init_profiling(ProfilingBackend::PuffinHttp),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfilingMode {
    /// Profiling is disabled
    #[default]
    Off,
    /// Profiling scopes are recorded in-process
    On,
    /// Profiling scopes are recorded and served to external tools such as 'puffin_viewer'
    WithWebServer,
}

/// How native shared library file names are built.
///
/// A module stem is `"{prefix}-{module}"`, e.g. `csfml-graphics`. On Windows
/// the `windows_suffix` is appended before the extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryNaming {
    pub prefix: String,
    pub windows_suffix: String,
}

impl Default for LibraryNaming {
    fn default() -> Self {
        Self {
            prefix: "csfml".to_string(),
            windows_suffix: "-2".to_string(),
        }
    }
}
