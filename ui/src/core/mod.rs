//! Platform-agnostic building blocks shared by components.

pub mod format;
pub mod links;
pub mod platform;
pub mod scheduler;
pub mod timing;
