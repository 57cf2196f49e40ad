//! Cross-cutting error types for desk.
//!
//! Transport and auth errors live in `desk-api` and `desk-auth`. A unified
//! error is deferred to `desk-cli`, where everything converges on `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any desk crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation before it was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend envelope carried a non-success code.
    #[error("Backend error (code {code}): {msg}")]
    Backend { code: i64, msg: String },
}
