//! Auto-advancing project carousel: a timer-driven state machine plus the
//! component that renders it.

pub mod engine;
mod view;

pub use engine::{Carousel, CarouselConfig, CarouselError, CarouselEvent, CarouselView, PlayMode};
pub use view::ProjectCarousel;
