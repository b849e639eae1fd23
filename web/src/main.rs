use dioxus::prelude::*;
use tracing::info;

use ui::{Portfolio, ThemeStyles};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "{ui::site::OWNER_NAME}" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        ThemeStyles {}

        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! { Portfolio {} }
}

/// Single-page site: unknown paths show the portfolio instead of an error.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    info!(path = %segments.join("/"), "unknown route, serving portfolio");
    rsx! { Portfolio {} }
}
