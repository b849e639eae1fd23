mod about;
mod contact;
mod footer;
mod hero;
mod portfolio;
mod projects;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use footer::SiteFooter;
pub use hero::HeroSection;
pub use portfolio::Portfolio;
pub use projects::ProjectsSection;
