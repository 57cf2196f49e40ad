use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlayError {
    #[error("overlay '{0}' is already registered")]
    AlreadyRegistered(String),

    #[error("overlay '{0}' does not exist")]
    NotRegistered(String),

    #[error("overlay '{0}' is already active")]
    AlreadyActive(String),

    #[error("cannot use overlay '{requested}': '{active}' is currently active")]
    AnotherActive { requested: String, active: String },

    #[error("overlay '{0}' is currently not active")]
    NotActive(String),

    #[error("password prompt cancelled")]
    PromptCancelled,
}
