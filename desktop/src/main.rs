#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::tao::{dpi::LogicalSize, window::WindowBuilder};
#[cfg(feature = "desktop")]
use dioxus::desktop::Config;
use dioxus::prelude::*;
use tracing::info;

use ui::{Portfolio, ThemeStyles};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("{} – Portfolio", ui::site::OWNER_NAME))
                        .with_inner_size(LogicalSize::new(1280.0, 860.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| info!(version = env!("CARGO_PKG_VERSION"), "desktop portfolio started"));

    rsx! {
        // Theme is embedded in the binary; no stylesheet file ships with it.
        ThemeStyles {}

        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! { Portfolio {} }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load images straight from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/public"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("public")))
            .unwrap_or_else(|| PathBuf::from("public"))
    }
}
