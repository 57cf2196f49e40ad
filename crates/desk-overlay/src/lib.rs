//! # desk-overlay
//!
//! Coordinates modal dialogs so that at most one is active at a time.
//!
//! [`OverlayManager`] owns the registered dialogs and enforces exclusivity;
//! a dialog registered with `can_force_close` may displace whichever dialog
//! is active. [`PasswordPrompt`] is the one dialog controller built on it.

mod error;
mod manager;
mod password;

pub use error::OverlayError;
pub use manager::{Dialog, OverlayManager};
pub use password::{PasswordCallback, PasswordPrompt, PasswordReason, PromptLabel};
