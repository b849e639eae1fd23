use dioxus::prelude::*;

use crate::i18n::use_locale;

#[component]
pub fn SiteFooter() -> Element {
    let strings = use_locale().current_strings();

    rsx! {
        footer { class: "footer",
            p { class: "footer__credit", "{strings.footer}" }
        }
    }
}
