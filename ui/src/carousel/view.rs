use dioxus::prelude::*;
use futures_channel::mpsc;
use futures_util::{stream, StreamExt};
use tracing::{debug, warn};

use crate::core::scheduler::LiveTimers;
use crate::i18n::use_locale;
use crate::projects::Project;

use super::engine::{Carousel, CarouselConfig, CarouselEvent, CarouselView, PlayMode};

#[derive(Debug, Clone, Copy)]
enum CarouselMsg {
    Next,
    Previous,
    JumpTo(usize),
    Timer(CarouselEvent),
}

impl From<CarouselEvent> for CarouselMsg {
    fn from(event: CarouselEvent) -> Self {
        CarouselMsg::Timer(event)
    }
}

#[component]
pub fn ProjectCarousel(projects: Vec<Project>) -> Element {
    let locale = use_locale();
    let mut snapshot = use_signal(CarouselView::initial);
    let len = projects.len();

    let coroutine = use_coroutine(move |ui_rx: UnboundedReceiver<CarouselMsg>| async move {
        let mut carousel = match Carousel::new(len, CarouselConfig::default()) {
            Ok(carousel) => carousel,
            Err(err) => {
                warn!(%err, "carousel not started");
                return;
            }
        };

        // Timer tasks post into their own channel, merged with user input.
        // The two sources are polled round-robin, so an Advance queued just
        // before a pause can arrive after it; `Carousel::handle` drops it.
        let (timer_tx, timer_rx) = mpsc::unbounded::<CarouselMsg>();
        let mut timers = LiveTimers::new(timer_tx);
        let mut inbox = stream::select(ui_rx, timer_rx);

        carousel.start(&mut timers);
        snapshot.set(carousel.view());

        while let Some(msg) = inbox.next().await {
            let changed = match msg {
                CarouselMsg::Next => {
                    carousel.next(&mut timers);
                    true
                }
                CarouselMsg::Previous => {
                    carousel.previous(&mut timers);
                    true
                }
                CarouselMsg::JumpTo(index) => match carousel.jump_to(index, &mut timers) {
                    Ok(()) => true,
                    Err(err) => {
                        debug!(%err, "jump ignored");
                        false
                    }
                },
                CarouselMsg::Timer(event) => carousel.handle(event, &mut timers),
            };

            if changed {
                snapshot.set(carousel.view());
            }
        }

        carousel.stop(&mut timers);
    });

    let strings = locale.current_strings();
    let view = snapshot();
    let status = match view.mode {
        PlayMode::Autoplaying => strings.projects.autoplay_active.as_str(),
        PlayMode::Paused => strings.projects.autoplay_paused.as_str(),
    };
    let status_class = if view.is_autoplaying() {
        "carousel__status carousel__status--playing"
    } else {
        "carousel__status carousel__status--paused"
    };

    rsx! {
        div { class: "carousel",
            // Keyed per project so each change remounts the card and replays
            // the enter animation.
            for current in projects.get(view.index) {
                article { class: "carousel__card", key: "{current.id}",
                    div { class: "carousel__media",
                        img {
                            class: "carousel__image",
                            src: "{current.image}",
                            alt: "{current.title}",
                        }
                        span { class: "carousel__badge", "{current.status}" }
                    }
                    div { class: "carousel__body",
                        h3 { class: "carousel__title", "{current.title}" }
                        p { class: "carousel__description", "{current.description}" }
                        ul { class: "carousel__tech",
                            for tag in current.tech.iter() {
                                li { class: "carousel__tag", "{tag}" }
                            }
                        }
                        a {
                            class: "carousel__link",
                            href: "{current.link}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{strings.projects.view}"
                        }
                    }
                }
            }

            div { class: "carousel__controls",
                button {
                    r#type: "button",
                    class: "carousel__arrow carousel__arrow--prev",
                    aria_label: "{strings.projects.previous}",
                    onclick: move |_| coroutine.send(CarouselMsg::Previous),
                    "‹"
                }
                div { class: "carousel__dots",
                    for (i, project) in projects.iter().enumerate() {
                        button {
                            key: "{project.id}",
                            r#type: "button",
                            class: if i == view.index { "carousel__dot carousel__dot--active" } else { "carousel__dot" },
                            aria_label: "{strings.projects.goto} {i + 1}",
                            onclick: move |_| coroutine.send(CarouselMsg::JumpTo(i)),
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "carousel__arrow carousel__arrow--next",
                    aria_label: "{strings.projects.next}",
                    onclick: move |_| coroutine.send(CarouselMsg::Next),
                    "›"
                }
            }

            p { class: "{status_class}", "{status}" }
        }
    }
}
