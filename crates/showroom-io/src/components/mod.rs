//! Dioxus UI components for the ShowRoom landing page.
//!
//! Provides the navigation bar with its auth affordances, the animated
//! hero section, the drag-and-drop upload widget, the project gallery,
//! and the shared button.

mod button;
mod hero;
mod navbar;
mod projects;
mod upload;

pub use button::Button;
pub use button::ButtonVariant;
pub use hero::Hero;
pub use navbar::Navbar;
pub use projects::Projects;
pub use upload::Upload;
