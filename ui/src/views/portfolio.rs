use dioxus::prelude::*;
use tracing::debug;

use crate::components::{MatrixRain, SiteNav};
use crate::i18n::use_locale_provider;

use super::{AboutSection, ContactSection, HeroSection, ProjectsSection, SiteFooter};

/// The whole single-page portfolio.
///
/// Owns the locale state for the page; a reload starts again in Portuguese.
#[component]
pub fn Portfolio() -> Element {
    let locale = use_locale_provider();
    debug!(locale = %locale.locale(), "portfolio render");

    rsx! {
        div { id: "top", class: "page", lang: "{locale.locale().tag()}",
            MatrixRain {}
            SiteNav {}
            main { class: "page__content",
                HeroSection {}
                AboutSection {}
                ProjectsSection {}
                ContactSection {}
            }
            SiteFooter {}
        }
    }
}
