//! Output document models for the notetaker.

mod sentiment;
mod soap;
mod summary;

pub use sentiment::*;
pub use soap::*;
pub use summary::*;
