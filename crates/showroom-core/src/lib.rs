//! showroom-core: Pure upload state machine and shared types (sans-IO).
//!
//! Models the landing page's upload widget as an event-driven state
//! machine: file acquisition (gated by sign-in state), asynchronous
//! decode, simulated progress advancement, and at-most-once deferred
//! completion. Timers and browser file handles live in `showroom-io`;
//! this crate only consumes their outcomes as events, which keeps every
//! transition natively testable.

pub mod auth;
pub mod config;
pub mod file;
pub mod machine;

pub use auth::AuthState;
pub use config::UploadConfig;
pub use file::SelectedFile;
pub use machine::{CycleId, Tick, UploadMachine, UploadPhase};
