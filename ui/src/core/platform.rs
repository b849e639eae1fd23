//! Platform detection and task spawning helpers.

use std::future::Future;

use dioxus::prelude::{spawn, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
        }
    }
}

/// Spawn a future on the Dioxus runtime, owned by the current scope.
pub fn spawn_future(fut: impl Future<Output = ()> + 'static) -> Task {
    spawn(fut)
}
