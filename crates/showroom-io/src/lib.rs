//! showroom-io: Browser I/O and Dioxus component library.
//!
//! Handles file reading, the Puter auth bridge, fluent-based
//! localization, analytics events, and provides the UI components for
//! the ShowRoom landing page (navbar, hero, upload widget, project
//! gallery).

pub mod analytics;
pub mod auth;
pub mod components;
pub mod decode;
pub mod i18n;

pub use auth::AuthContext;
pub use components::{Button, ButtonVariant, Hero, Navbar, Projects, Upload};
pub use i18n::{I18n, Language};
