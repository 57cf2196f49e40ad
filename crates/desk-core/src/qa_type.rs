//! QA mode identifiers passed as `qa_type` to the chat endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// QA mode understood by the backend.
///
/// The backend owns the set of valid modes, so any string is accepted.
/// The associated constants cover the modes it ships with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QaType(String);

impl QaType {
    pub const COMMON_QA: &'static str = "COMMON_QA";
    pub const DATABASE_QA: &'static str = "DATABASE_QA";
    pub const FILEDATA_QA: &'static str = "FILEDATA_QA";
    pub const REPORT_QA: &'static str = "REPORT_QA";

    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is one of the modes the backend ships with.
    #[must_use]
    pub fn is_well_known(&self) -> bool {
        matches!(
            self.0.as_str(),
            Self::COMMON_QA | Self::DATABASE_QA | Self::FILEDATA_QA | Self::REPORT_QA
        )
    }
}

impl Default for QaType {
    fn default() -> Self {
        Self::new(Self::COMMON_QA)
    }
}

impl fmt::Display for QaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QaType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for QaType {
    fn from(value: String) -> Self {
        Self(value)
    }
}
