//! Shared UI crate for the portfolio. Views, string tables and the animation
//! and carousel logic live here; the platform crates only launch them.

pub mod carousel;
pub mod core;
pub mod effects;
pub mod i18n;
pub mod projects;
pub mod site;
pub mod theme;
pub mod views;

pub mod components {
    // Falling-glyph canvas behind the page (components/matrix_rain.rs)
    pub mod matrix_rain;
    pub use matrix_rain::MatrixRain;

    // Top bar with anchors and language toggle (components/site_nav.rs)
    pub mod site_nav;
    pub use site_nav::SiteNav;

    // Animated skill progress bar (components/skill_bar.rs)
    pub mod skill_bar;
    pub use skill_bar::SkillBar;
}

pub use theme::ThemeStyles;
pub use views::Portfolio;
