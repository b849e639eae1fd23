use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use crate::core::platform::Platform;
use crate::effects::{self, RainConfig, RainHandle};

const CANVAS_ID: &str = "matrix-rain";

/// Full-viewport canvas behind the page, animated with falling glyphs.
///
/// The animation starts after the canvas is mounted and is torn down with the
/// component. Where no canvas can be reached the element stays blank.
#[component]
pub fn MatrixRain() -> Element {
    let handle: Rc<RefCell<Option<RainHandle>>> = use_hook(|| Rc::new(RefCell::new(None)));

    {
        let handle = handle.clone();
        use_effect(move || {
            if handle.borrow().is_some() {
                return;
            }
            match effects::mount(CANVAS_ID, RainConfig::default()) {
                Ok(running) => {
                    handle.borrow_mut().replace(running);
                }
                Err(err) => {
                    debug!(%err, platform = Platform::current().as_str(), "background rain disabled");
                }
            }
        });
    }

    use_drop(move || {
        if let Some(running) = handle.borrow_mut().take() {
            running.stop();
        }
    });

    rsx! {
        canvas {
            id: CANVAS_ID,
            class: "matrix-rain",
            aria_hidden: "true",
        }
    }
}
