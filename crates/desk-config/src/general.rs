//! General application configuration.

use desk_core::QaType;
use serde::{Deserialize, Serialize};

/// Default page size for list commands.
const fn default_limit() -> u32 {
    20
}

fn default_qa_type() -> String {
    QaType::COMMON_QA.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default page size for history and demand listings.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// QA mode used by `desk chat` when `--qa-type` is not given.
    #[serde(default = "default_qa_type")]
    pub default_qa_type: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            default_qa_type: default_qa_type(),
        }
    }
}

impl GeneralConfig {
    #[must_use]
    pub fn qa_type(&self) -> QaType {
        QaType::new(self.default_qa_type.clone())
    }
}
