use dioxus::prelude::*;

use crate::carousel::ProjectCarousel;
use crate::i18n::use_locale;
use crate::projects;

#[component]
pub fn ProjectsSection() -> Element {
    let strings = use_locale().current_strings();
    let catalog = projects::catalog(strings);

    rsx! {
        section { id: "projects", class: "section projects",
            h2 { class: "section__title", "{strings.projects.title}" }
            p { class: "section__lead", "{strings.projects.description}" }
            ProjectCarousel { projects: catalog }
        }
    }
}
