use serde::{Deserialize, Serialize};

use crate::qa_type::QaType;

/// Body of `/sanic/dify/get_answer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatQuery {
    pub query: String,
    pub qa_type: QaType,
    pub uuid: String,
    pub chat_id: String,
    /// Attached files as the backend returned them from upload; opaque here.
    pub file_list: Vec<serde_json::Value>,
}

impl ChatQuery {
    /// A query with no attached files.
    #[must_use]
    pub fn new(
        query: impl Into<String>,
        qa_type: QaType,
        uuid: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            qa_type,
            uuid: uuid.into(),
            chat_id: chat_id.into(),
            file_list: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_files(mut self, files: Vec<serde_json::Value>) -> Self {
        self.file_list = files;
        self
    }
}

/// Body carrying only a chat id (`/sanic/dify/get_dify_suggested`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRef {
    pub chat_id: String,
}

/// Body of `/sanic/dify/stop_chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopChat {
    pub task_id: String,
    pub qa_type: QaType,
}
