//! Login, chat history and feedback endpoints.

use desk_core::payloads::{DeleteUserRecords, Feedback, LoginRequest, UserRecordQuery};

use crate::{ApiClient, error::ApiError, paths};

impl ApiClient {
    /// Log in. Sends no `Authorization` header.
    ///
    /// The token is in the response body; see [`crate::extract_token`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] on transport failure.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<reqwest::Response, ApiError> {
        let request = self.http.post(self.url(paths::LOGIN)).json(credentials);
        self.send(paths::LOGIN, request).await
    }

    /// Page through the user's chat history, optionally filtered by text or chat.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] or [`ApiError::Http`].
    pub async fn query_user_record(
        &self,
        query: &UserRecordQuery,
    ) -> Result<reqwest::Response, ApiError> {
        let request = self.authed_json(paths::QUERY_USER_RECORD, query)?;
        self.send(paths::QUERY_USER_RECORD, request).await
    }

    /// Delete chat history records by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] or [`ApiError::Http`].
    pub async fn delete_user_record(
        &self,
        record_ids: &[String],
    ) -> Result<reqwest::Response, ApiError> {
        let body = DeleteUserRecords {
            record_ids: record_ids.to_vec(),
        };
        let request = self.authed_json(paths::DELETE_USER_RECORD, &body)?;
        self.send(paths::DELETE_USER_RECORD, request).await
    }

    /// Rate an answer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] or [`ApiError::Http`].
    pub async fn feedback(
        &self,
        chat_id: &str,
        rating: serde_json::Number,
    ) -> Result<reqwest::Response, ApiError> {
        let body = Feedback {
            chat_id: chat_id.to_string(),
            rating,
        };
        let request = self.authed_json(paths::DIFY_FEAD_BACK, &body)?;
        self.send(paths::DIFY_FEAD_BACK, request).await
    }
}
