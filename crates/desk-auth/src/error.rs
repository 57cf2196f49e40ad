use desk_api::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("login failed: {0}")]
    LoginFailed(#[from] ApiError),

    #[error("{0}")]
    Other(String),
}
