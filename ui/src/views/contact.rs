use dioxus::prelude::*;

use crate::core::links;
use crate::i18n::use_locale;
use crate::site;

#[derive(Debug, Clone, PartialEq)]
struct ContactCard {
    modifier: &'static str,
    label: String,
    value: &'static str,
    href: String,
    external: bool,
}

#[component]
pub fn ContactSection() -> Element {
    let strings = use_locale().current_strings();
    let contact = &strings.contact;

    let cards = [
        ContactCard {
            modifier: "contact-card--email",
            label: contact.email.clone(),
            value: site::EMAIL,
            href: links::mailto_href(site::EMAIL, &contact.email_subject, &contact.email_body()),
            external: false,
        },
        ContactCard {
            modifier: "contact-card--whatsapp",
            label: contact.phone.clone(),
            value: site::PHONE_DISPLAY,
            href: links::whatsapp_href(site::PHONE_DIGITS, &contact.whatsapp_message),
            external: true,
        },
        ContactCard {
            modifier: "contact-card--linkedin",
            label: "LinkedIn".to_string(),
            value: site::LINKEDIN_HANDLE,
            href: site::LINKEDIN_URL.to_string(),
            external: true,
        },
        ContactCard {
            modifier: "contact-card--instagram",
            label: "Instagram".to_string(),
            value: site::INSTAGRAM_HANDLE,
            href: site::INSTAGRAM_URL.to_string(),
            external: true,
        },
    ];

    rsx! {
        section { id: "contact", class: "section contact",
            h2 { class: "section__title", "{contact.title}" }
            p { class: "section__lead", "{contact.description}" }
            div { class: "contact__grid",
                for card in cards {
                    a {
                        key: "{card.modifier}",
                        class: "contact-card {card.modifier}",
                        href: "{card.href}",
                        target: if card.external { "_blank" },
                        rel: if card.external { "noopener noreferrer" },
                        span { class: "contact-card__label", "{card.label}" }
                        span { class: "contact-card__value", "{card.value}" }
                    }
                }
            }
        }
    }
}
