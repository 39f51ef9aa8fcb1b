//! Native library discovery and one-time loading.
//!
//! Each wrapped module (audio, graphics, system, window) lives in its own
//! shared library. This module knows how those libraries are named on each
//! platform and provides [`LoadGuard`], a process-wide guard that makes
//! loading idempotent.

use std::fmt;

use parking_lot::{Mutex, const_mutex};

use crate::config::LibraryNaming;

/// Errors raised while locating or loading a native library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeError {
    /// The current operating system has no known library naming scheme.
    UnsupportedPlatform {
        /// Value of `std::env::consts::OS`.
        os: &'static str,
    },

    /// The loader callback failed.
    LoadFailed {
        /// File name of the library being loaded.
        library: String,
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeError::UnsupportedPlatform { os } => {
                write!(f, "Unsupported platform for native libraries: {}", os)
            }
            NativeError::LoadFailed { library, reason } => {
                write!(f, "Failed to load native library '{}': {}", library, reason)
            }
        }
    }
}

impl std::error::Error for NativeError {}

/// A native module wrapped by Vellum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeModule {
    Audio,
    Graphics,
    System,
    Window,
}

impl NativeModule {
    pub const ALL: [NativeModule; 4] = [
        NativeModule::Audio,
        NativeModule::Graphics,
        NativeModule::System,
        NativeModule::Window,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NativeModule::Audio => "audio",
            NativeModule::Graphics => "graphics",
            NativeModule::System => "system",
            NativeModule::Window => "window",
        }
    }

    /// Library stem without platform decoration, e.g. `csfml-graphics`.
    pub fn stem(self, naming: &LibraryNaming) -> String {
        format!("{}-{}", naming.prefix, self.name())
    }

    fn index(self) -> usize {
        match self {
            NativeModule::Audio => 0,
            NativeModule::Graphics => 1,
            NativeModule::System => 2,
            NativeModule::Window => 3,
        }
    }
}

/// Operating systems with a known shared library naming scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
}

impl Platform {
    /// The platform this process runs on.
    pub fn current() -> Result<Platform, NativeError> {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &'static str) -> Result<Platform, NativeError> {
        match os {
            "windows" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            "macos" => Ok(Platform::MacOs),
            other => Err(NativeError::UnsupportedPlatform { os: other }),
        }
    }
}

/// File name of the shared library for `module` on `platform`.
///
/// ```
/// use vellum_core::config::LibraryNaming;
/// use vellum_core::native::{shared_library_name, NativeModule, Platform};
///
/// let naming = LibraryNaming::default();
/// assert_eq!(
///     shared_library_name(NativeModule::Graphics, Platform::Linux, &naming),
///     "libcsfml-graphics.so"
/// );
/// ```
pub fn shared_library_name(module: NativeModule, platform: Platform, naming: &LibraryNaming) -> String {
    let stem = module.stem(naming);
    match platform {
        Platform::Windows => format!("{}{}.dll", stem, naming.windows_suffix),
        Platform::Linux => format!("lib{}.so", stem),
        Platform::MacOs => format!("lib{}.dylib", stem),
    }
}

/// One-time initialization guard for a native library.
///
/// A successful load is latched: later calls to [`LoadGuard::ensure_loaded`]
/// return immediately without running the loader. A failed load is not
/// latched, so the next call tries again.
#[derive(Debug)]
pub struct LoadGuard {
    loaded: Mutex<bool>,
}

static MODULE_GUARDS: [LoadGuard; 4] = [
    LoadGuard::new(),
    LoadGuard::new(),
    LoadGuard::new(),
    LoadGuard::new(),
];

impl LoadGuard {
    pub const fn new() -> Self {
        Self {
            loaded: const_mutex(false),
        }
    }

    /// The process-wide guard for `module`.
    pub fn for_module(module: NativeModule) -> &'static LoadGuard {
        &MODULE_GUARDS[module.index()]
    }

    pub fn is_loaded(&self) -> bool {
        *self.loaded.lock()
    }

    /// Run `loader` unless a previous call already succeeded.
    ///
    /// The lock is held while the loader runs, so concurrent callers wait
    /// for the first one instead of loading twice.
    pub fn ensure_loaded<F>(&self, loader: F) -> Result<(), NativeError>
    where
        F: FnOnce() -> Result<(), NativeError>,
    {
        let mut loaded = self.loaded.lock();
        if *loaded {
            return Ok(());
        }

        match loader() {
            Ok(()) => {
                *loaded = true;
                tracing::debug!("native library loaded");
                Ok(())
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Err(e)
            }
        }
    }
}

impl Default for LoadGuard {
    fn default() -> Self {
        Self::new()
    }
}
