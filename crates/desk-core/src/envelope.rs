//! The backend's common response wrapper.
//!
//! Every JSON endpoint answers with `{"code": .., "msg": .., "data": ..}`.
//! Request functions never decode it; callers that want typed data do.

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Code the backend uses for success.
pub const SUCCESS_CODE: i64 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Unwrap the payload, turning a non-success code into [`CoreError::Backend`].
    ///
    /// A success envelope without `data` yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Backend`] when `code` is not [`SUCCESS_CODE`].
    pub fn into_result(self) -> Result<Option<T>, CoreError> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(CoreError::Backend {
                code: self.code,
                msg: self.msg,
            })
        }
    }
}
