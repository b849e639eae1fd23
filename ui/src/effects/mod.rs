//! Animated page background.

pub mod rain;

#[cfg(target_arch = "wasm32")]
mod canvas;

use thiserror::Error;

pub use rain::{GlyphSurface, RainConfig, RainField};

#[cfg(target_arch = "wasm32")]
pub use canvas::{mount, RainHandle};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RainError {
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(&'static str),
}

/// Running background animation. Native builds never hold one.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct RainHandle {
    _private: (),
}

#[cfg(not(target_arch = "wasm32"))]
impl RainHandle {
    pub fn stop(self) {}
}

/// The desktop webview's canvas is not reachable from Rust, so the effect is
/// skipped there.
#[cfg(not(target_arch = "wasm32"))]
pub fn mount(_canvas_id: &str, _config: RainConfig) -> Result<RainHandle, RainError> {
    Err(RainError::SurfaceUnavailable("no DOM canvas on this platform"))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_mount_reports_missing_surface() {
        let err = mount("matrix-rain", RainConfig::default()).unwrap_err();
        assert_eq!(err, RainError::SurfaceUnavailable("no DOM canvas on this platform"));
        assert!(err.to_string().starts_with("drawing surface unavailable"));
    }
}
