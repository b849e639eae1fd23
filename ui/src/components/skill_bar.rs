use dioxus::prelude::*;

use crate::core::{format, timing};
use crate::site::Skill;

/// Delay between consecutive bars filling in.
const STAGGER_MS: u64 = 100;
/// Pause before the first bar starts.
const INITIAL_DELAY_MS: u64 = 300;

/// Labelled progress bar that grows from empty to its percentage shortly
/// after mount. `order` staggers bars so they fill one after another.
#[component]
pub fn SkillBar(skill: Skill, order: usize) -> Element {
    let mut filled = use_signal(|| false);

    // The future belongs to this component; unmounting drops the pending delay.
    use_future(move || async move {
        timing::sleep_ms(INITIAL_DELAY_MS + order as u64 * STAGGER_MS).await;
        filled.set(true);
    });

    let width = if filled() {
        format::bar_width_style(skill.percentage)
    } else {
        format::bar_width_style(0)
    };

    rsx! {
        div { class: "skill",
            div { class: "skill__header",
                span { class: "skill__name", "{skill.name}" }
                span { class: "skill__value", "{format::format_percent(skill.percentage)}" }
            }
            div {
                class: "skill__track",
                role: "progressbar",
                aria_valuenow: "{skill.percentage}",
                aria_valuemin: "0",
                aria_valuemax: "100",
                div { class: "skill__fill", style: "{width}" }
            }
        }
    }
}
