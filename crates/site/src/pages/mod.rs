//! Routed pages.

mod landing;
mod project;

pub use landing::LandingPage;
pub use project::{ProjectPage, ProjectSlot, ProjectTicket};
