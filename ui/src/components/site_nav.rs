use dioxus::prelude::*;

use crate::i18n::use_locale;
use crate::site;

/// Fixed top bar: brand, section anchors and the language toggle.
///
/// On narrow screens the anchors collapse into a menu; picking an entry or
/// switching language closes it again.
#[component]
pub fn SiteNav() -> Element {
    let mut locale = use_locale();
    let mut menu_open = use_signal(|| false);

    let strings = locale.current_strings();
    let switch_label = locale.locale().switch_label();
    let links = [
        ("#about", strings.nav.about.as_str()),
        ("#projects", strings.nav.projects.as_str()),
        ("#contact", strings.nav.contact.as_str()),
    ];
    let menu_label = if menu_open() {
        strings.nav.menu_close.as_str()
    } else {
        strings.nav.menu_open.as_str()
    };

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                a { class: "navbar__brand", href: "#top", "{site::OWNER_NAME}" }

                nav { class: "navbar__links",
                    for (href, label) in links {
                        a { key: "{href}", class: "navbar__link", href: "{href}", "{label}" }
                    }
                    button {
                        r#type: "button",
                        class: "navbar__locale",
                        aria_label: "{strings.nav.language_label}",
                        onclick: move |_| locale.toggle(),
                        "{switch_label}"
                    }
                }

                button {
                    r#type: "button",
                    class: "navbar__menu-toggle",
                    aria_label: "{menu_label}",
                    aria_expanded: "{menu_open()}",
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() { "✕" } else { "☰" }
                }
            }

            if menu_open() {
                nav { class: "navbar__mobile",
                    for (href, label) in links {
                        a {
                            key: "{href}",
                            class: "navbar__mobile-link",
                            href: "{href}",
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                    button {
                        r#type: "button",
                        class: "navbar__locale navbar__locale--mobile",
                        aria_label: "{strings.nav.language_label}",
                        onclick: move |_| {
                            locale.toggle();
                            menu_open.set(false);
                        },
                        "{switch_label}"
                    }
                }
            }
        }
    }
}
