//! Dify chat endpoints.

use desk_core::QaType;
use desk_core::payloads::{ChatQuery, ChatRef, StopChat};

use crate::{ApiClient, error::ApiError, paths};

impl ApiClient {
    /// Ask a question. The response is an event stream; read it with
    /// [`reqwest::Response::bytes_stream`] or [`reqwest::Response::chunk`].
    ///
    /// This is the only call with a timeout ([`ApiClient::chat_timeout`]).
    /// It bounds the wait for the response headers; once they arrive the
    /// answer stream is never cut off.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] if no token is available,
    /// [`ApiError::ChatTimeout`] if no response arrived in time, or
    /// [`ApiError::Http`] on transport failure.
    pub async fn get_answer(&self, query: &ChatQuery) -> Result<reqwest::Response, ApiError> {
        let request = self.authed_json(paths::GET_ANSWER, query)?;
        tokio::time::timeout(self.chat_timeout, self.send(paths::GET_ANSWER, request))
            .await
            .map_err(|_| {
                tracing::debug!(timeout = ?self.chat_timeout, "chat request timed out");
                ApiError::ChatTimeout(self.chat_timeout)
            })?
    }

    /// Fetch follow-up question suggestions for a chat.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] or [`ApiError::Http`].
    pub async fn suggested(&self, chat_id: &str) -> Result<reqwest::Response, ApiError> {
        let body = ChatRef {
            chat_id: chat_id.to_string(),
        };
        let request = self.authed_json(paths::GET_DIFY_SUGGESTED, &body)?;
        self.send(paths::GET_DIFY_SUGGESTED, request).await
    }

    /// Stop a running chat task.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] or [`ApiError::Http`].
    pub async fn stop_chat(
        &self,
        task_id: &str,
        qa_type: &QaType,
    ) -> Result<reqwest::Response, ApiError> {
        let body = StopChat {
            task_id: task_id.to_string(),
            qa_type: qa_type.clone(),
        };
        let request = self.authed_json(paths::STOP_CHAT, &body)?;
        self.send(paths::STOP_CHAT, request).await
    }
}
