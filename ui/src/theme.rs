//! Shared stylesheet, embedded so web and desktop builds need no asset files.

use dioxus::prelude::*;

pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

#[component]
pub fn ThemeStyles() -> Element {
    rsx! {
        document::Style { "{THEME_CSS}" }
    }
}
