use dioxus::prelude::*;

use crate::i18n::use_locale;
use crate::site;

#[component]
pub fn HeroSection() -> Element {
    let strings = use_locale().current_strings();
    let hero = &strings.hero;

    rsx! {
        section { id: "hero", class: "hero",
            div { class: "hero__text",
                h1 { class: "hero__title", "{hero.title}" }
                p { class: "hero__subtitle", "{hero.subtitle}" }
                p { class: "hero__description", "{hero.description}" }
                a { class: "button button--primary", href: "#projects", "{hero.cta}" }
            }
            div { class: "hero__portrait",
                img { src: site::HERO_PORTRAIT, alt: "{hero.portrait_alt}" }
            }
        }
    }
}
