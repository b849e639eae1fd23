//! Internationalization (i18n) support for `portfolio-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (bundle selection + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   pt-BR/portfolio_ui.ftl   (fallback/reference)
//!   en-US/portfolio_ui.ftl
//! ```
//!
//! Unlike a process-wide loader, every supported [`Locale`] gets its own
//! immutable [`Strings`] table, resolved once and cached. The *active* locale
//! is owned by the page (see [`LocaleSwitcher`]) and handed to sections through
//! context, so a toggle re-renders exactly the views that read it.
//!
//! Usage in a component:
//! ```ignore
//! let locale = use_locale();
//! let strings = locale.current_strings();
//! rsx! { h2 { "{strings.about.title}" } }
//! ```
//!
//! To add a string:
//! 1. Add the message to `pt-BR/portfolio_ui.ftl` (the `fl!` check runs against it).
//! 2. Add the same ID to every other locale.
//! 3. Surface it through a field on the matching `*Strings` group below.
use std::fmt;

use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{info, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Fluent "domain": the package name with `-` replaced by `_`, as `fl!` expects.
///
/// Fallback file path must be: `i18n/pt-BR/{DOMAIN}.ftl`
const DOMAIN: &str = "portfolio_ui";

const FALLBACK_TAG: &str = "pt-BR";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// The two languages the page ships in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Pt,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Pt, Locale::En];

    /// Short code used in markup (`lang` attribute) and logs.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Pt => "pt",
            Locale::En => "en",
        }
    }

    /// Folder name of the embedded bundle for this locale.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::Pt => "pt-BR",
            Locale::En => "en-US",
        }
    }

    pub fn language_id(self) -> LanguageIdentifier {
        self.tag()
            .parse()
            .unwrap_or_else(|_| fallback_language_id())
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::Pt => Locale::En,
            Locale::En => Locale::Pt,
        }
    }

    /// Label of the toggle button: names the language a click switches *to*.
    pub fn switch_label(self) -> &'static str {
        match self.toggled() {
            Locale::Pt => "PT",
            Locale::En => "EN",
        }
    }

    /// The complete string table for this locale.
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::Pt => &PT_STRINGS,
            Locale::En => &EN_STRINGS,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

fn fallback_language_id() -> LanguageIdentifier {
    FALLBACK_TAG
        .parse()
        .expect("valid fallback language identifier")
}

static PT_STRINGS: Lazy<Strings> = Lazy::new(|| load_strings(Locale::Pt));
static EN_STRINGS: Lazy<Strings> = Lazy::new(|| load_strings(Locale::En));

/// Loader with `locale` selected on top of the pt-BR fallback.
pub(crate) fn loader_for(locale: Locale) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, fallback_language_id());
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[locale.language_id()]) {
        warn!(%err, locale = locale.code(), "failed selecting locale bundle; continuing with {FALLBACK_TAG}");
    }
    loader
}

fn load_strings(locale: Locale) -> Strings {
    Strings::from_loader(&loader_for(locale))
}

/// Full, immutable set of user-facing strings for one locale.
#[derive(Debug, Clone, PartialEq)]
pub struct Strings {
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub about: AboutStrings,
    pub projects: ProjectsStrings,
    pub contact: ContactStrings,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavStrings {
    pub about: String,
    pub projects: String,
    pub contact: String,
    pub menu_open: String,
    pub menu_close: String,
    pub language_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroStrings {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta: String,
    pub portrait_alt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutStrings {
    pub title: String,
    pub description: String,
    pub skills: String,
    pub frontend: String,
    pub backend: String,
    pub database: String,
    pub experience: String,
    pub experience_text: String,
    pub highlights: [String; 3],
    pub portrait_alt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectsStrings {
    pub title: String,
    pub description: String,
    pub view: String,
    pub autoplay_active: String,
    pub autoplay_paused: String,
    pub previous: String,
    pub next: String,
    pub goto: String,
    /// Localized copy, in the same order as [`crate::projects::PROJECTS`].
    pub entries: Vec<ProjectCopy>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCopy {
    pub slug: &'static str,
    pub title: String,
    pub description: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactStrings {
    pub title: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub email_subject: String,
    pub email_greeting: String,
    pub email_message: String,
    pub email_followup: String,
    pub email_signoff: String,
    pub whatsapp_message: String,
}

impl ContactStrings {
    /// Body of the pre-filled e-mail, paragraphs separated by a blank line.
    pub fn email_body(&self) -> String {
        [
            self.email_greeting.as_str(),
            self.email_message.as_str(),
            self.email_followup.as_str(),
            self.email_signoff.as_str(),
        ]
        .join("\n\n")
    }
}

impl Strings {
    fn from_loader(loader: &FluentLanguageLoader) -> Self {
        Self {
            nav: NavStrings {
                about: fl!(loader, "nav-about"),
                projects: fl!(loader, "nav-projects"),
                contact: fl!(loader, "nav-contact"),
                menu_open: fl!(loader, "nav-menu-open"),
                menu_close: fl!(loader, "nav-menu-close"),
                language_label: fl!(loader, "nav-language-label"),
            },
            hero: HeroStrings {
                title: fl!(loader, "hero-title"),
                subtitle: fl!(loader, "hero-subtitle"),
                description: fl!(loader, "hero-description"),
                cta: fl!(loader, "hero-cta"),
                portrait_alt: fl!(loader, "hero-portrait-alt"),
            },
            about: AboutStrings {
                title: fl!(loader, "about-title"),
                description: fl!(loader, "about-description"),
                skills: fl!(loader, "about-skills"),
                frontend: fl!(loader, "about-frontend"),
                backend: fl!(loader, "about-backend"),
                database: fl!(loader, "about-database"),
                experience: fl!(loader, "about-experience"),
                experience_text: fl!(loader, "about-experience-text"),
                highlights: [
                    fl!(loader, "about-highlight-systems"),
                    fl!(loader, "about-highlight-testing"),
                    fl!(loader, "about-highlight-quality"),
                ],
                portrait_alt: fl!(loader, "about-portrait-alt"),
            },
            projects: ProjectsStrings {
                title: fl!(loader, "projects-title"),
                description: fl!(loader, "projects-description"),
                view: fl!(loader, "projects-view"),
                autoplay_active: fl!(loader, "projects-autoplay-active"),
                autoplay_paused: fl!(loader, "projects-autoplay-paused"),
                previous: fl!(loader, "projects-previous"),
                next: fl!(loader, "projects-next"),
                goto: fl!(loader, "projects-goto"),
                entries: vec![
                    ProjectCopy {
                        slug: "carvalho",
                        title: fl!(loader, "project-carvalho-title"),
                        description: fl!(loader, "project-carvalho-description"),
                        status: fl!(loader, "project-carvalho-status"),
                    },
                    ProjectCopy {
                        slug: "waterguardian",
                        title: fl!(loader, "project-waterguardian-title"),
                        description: fl!(loader, "project-waterguardian-description"),
                        status: fl!(loader, "project-waterguardian-status"),
                    },
                    ProjectCopy {
                        slug: "devduo",
                        title: fl!(loader, "project-devduo-title"),
                        description: fl!(loader, "project-devduo-description"),
                        status: fl!(loader, "project-devduo-status"),
                    },
                ],
            },
            contact: ContactStrings {
                title: fl!(loader, "contact-title"),
                description: fl!(loader, "contact-description"),
                email: fl!(loader, "contact-email"),
                phone: fl!(loader, "contact-phone"),
                email_subject: fl!(loader, "contact-email-subject"),
                email_greeting: fl!(loader, "contact-email-greeting"),
                email_message: fl!(loader, "contact-email-message"),
                email_followup: fl!(loader, "contact-email-followup"),
                email_signoff: fl!(loader, "contact-email-signoff"),
                whatsapp_message: fl!(loader, "contact-whatsapp-message"),
            },
            footer: fl!(loader, "footer-credit"),
        }
    }

    /// Flattened view of the table as dotted keys (`"nav.about"`,
    /// `"projects.entries.devduo.status"`, ...) in declaration order.
    pub fn entries(&self) -> Vec<(String, &str)> {
        let nav = &self.nav;
        let hero = &self.hero;
        let about = &self.about;
        let projects = &self.projects;
        let contact = &self.contact;

        let mut fields: Vec<(String, &str)> = vec![
            ("nav.about".into(), nav.about.as_str()),
            ("nav.projects".into(), nav.projects.as_str()),
            ("nav.contact".into(), nav.contact.as_str()),
            ("nav.menu_open".into(), nav.menu_open.as_str()),
            ("nav.menu_close".into(), nav.menu_close.as_str()),
            ("nav.language_label".into(), nav.language_label.as_str()),
            ("hero.title".into(), hero.title.as_str()),
            ("hero.subtitle".into(), hero.subtitle.as_str()),
            ("hero.description".into(), hero.description.as_str()),
            ("hero.cta".into(), hero.cta.as_str()),
            ("hero.portrait_alt".into(), hero.portrait_alt.as_str()),
            ("about.title".into(), about.title.as_str()),
            ("about.description".into(), about.description.as_str()),
            ("about.skills".into(), about.skills.as_str()),
            ("about.frontend".into(), about.frontend.as_str()),
            ("about.backend".into(), about.backend.as_str()),
            ("about.database".into(), about.database.as_str()),
            ("about.experience".into(), about.experience.as_str()),
            ("about.experience_text".into(), about.experience_text.as_str()),
            ("about.portrait_alt".into(), about.portrait_alt.as_str()),
            ("projects.title".into(), projects.title.as_str()),
            ("projects.description".into(), projects.description.as_str()),
            ("projects.view".into(), projects.view.as_str()),
            ("projects.autoplay_active".into(), projects.autoplay_active.as_str()),
            ("projects.autoplay_paused".into(), projects.autoplay_paused.as_str()),
            ("projects.previous".into(), projects.previous.as_str()),
            ("projects.next".into(), projects.next.as_str()),
            ("projects.goto".into(), projects.goto.as_str()),
            ("contact.title".into(), contact.title.as_str()),
            ("contact.description".into(), contact.description.as_str()),
            ("contact.email".into(), contact.email.as_str()),
            ("contact.phone".into(), contact.phone.as_str()),
            ("contact.email_subject".into(), contact.email_subject.as_str()),
            ("contact.email_greeting".into(), contact.email_greeting.as_str()),
            ("contact.email_message".into(), contact.email_message.as_str()),
            ("contact.email_followup".into(), contact.email_followup.as_str()),
            ("contact.email_signoff".into(), contact.email_signoff.as_str()),
            ("contact.whatsapp_message".into(), contact.whatsapp_message.as_str()),
            ("footer".into(), self.footer.as_str()),
        ];

        for (i, highlight) in about.highlights.iter().enumerate() {
            fields.push((format!("about.highlights.{i}"), highlight.as_str()));
        }
        for entry in &projects.entries {
            let slug = entry.slug;
            fields.push((format!("projects.entries.{slug}.title"), entry.title.as_str()));
            fields.push((
                format!("projects.entries.{slug}.description"),
                entry.description.as_str(),
            ));
            fields.push((format!("projects.entries.{slug}.status"), entry.status.as_str()));
        }

        fields
    }
}

/// Owned locale state: the active language plus access to its table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocaleState {
    current: Locale,
}

impl LocaleState {
    pub fn new(current: Locale) -> Self {
        Self { current }
    }

    pub fn locale(&self) -> Locale {
        self.current
    }

    pub fn toggle(&mut self) {
        self.current = self.current.toggled();
    }

    pub fn current_strings(&self) -> &'static Strings {
        self.current.strings()
    }
}

/// Reactive handle over [`LocaleState`], shared with descendants via context.
///
/// Reading through the handle subscribes the calling component, so a
/// [`toggle`](Self::toggle) re-renders exactly the views that display text.
#[derive(Clone, Copy, PartialEq)]
pub struct LocaleSwitcher {
    state: Signal<LocaleState>,
}

impl LocaleSwitcher {
    pub fn locale(&self) -> Locale {
        self.state.read().locale()
    }

    pub fn current_strings(&self) -> &'static Strings {
        self.state.read().current_strings()
    }

    pub fn toggle(&mut self) {
        self.state.with_mut(LocaleState::toggle);
        info!(locale = %self.state.peek().locale(), "locale switched");
    }
}

/// Create the page-level locale state (starts in Portuguese) and provide it
/// to every descendant.
pub fn use_locale_provider() -> LocaleSwitcher {
    let state = use_signal(LocaleState::default);
    use_context_provider(|| LocaleSwitcher { state })
}

/// Fetch the locale handle provided by the page container.
pub fn use_locale() -> LocaleSwitcher {
    use_context::<LocaleSwitcher>()
}
