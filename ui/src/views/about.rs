use dioxus::prelude::*;

use crate::components::SkillBar;
use crate::i18n::use_locale;
use crate::site::{self, SkillCategory};

#[component]
pub fn AboutSection() -> Element {
    let strings = use_locale().current_strings();
    let about = &strings.about;

    let category_title = |category: SkillCategory| match category {
        SkillCategory::Frontend => about.frontend.as_str(),
        SkillCategory::Backend => about.backend.as_str(),
        SkillCategory::Database => about.database.as_str(),
    };

    rsx! {
        section { id: "about", class: "section about",
            h2 { class: "section__title", "{about.title}" }
            div { class: "about__intro",
                img { class: "about__portrait", src: site::ABOUT_PORTRAIT, alt: "{about.portrait_alt}" }
                p { class: "about__description", "{about.description}" }
            }

            h3 { class: "about__skills-title", "{about.skills}" }
            div { class: "skills",
                for category in SkillCategory::ALL {
                    div { class: "skills__group {category.css_modifier()}",
                        h4 { class: "skills__group-title", "{category_title(category)}" }
                        for (i, skill) in category.skills().iter().enumerate() {
                            SkillBar {
                                key: "{skill.name}",
                                skill: *skill,
                                order: category.stagger_offset() + i,
                            }
                        }
                    }
                }
            }

            div { class: "experience",
                h3 { class: "experience__title", "{about.experience}" }
                p { class: "experience__text", "{about.experience_text}" }
                ul { class: "experience__highlights",
                    for highlight in about.highlights.iter() {
                        li { class: "experience__highlight", "{highlight}" }
                    }
                }
            }
        }
    }
}
