//! Document processing and demand-record endpoints under `/sanic/ta`.

use desk_core::payloads::{DeleteDemand, DocRef, FileKeyRequest, InsertDemand, PageRequest};

use crate::{ApiClient, error::ApiError, paths};

impl ApiClient {
    /// Convert an uploaded Word document to Markdown.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] or [`ApiError::Http`].
    pub async fn word_to_md(&self, file_key: &str) -> Result<reqwest::Response, ApiError> {
        let body = FileKeyRequest {
            file_key: file_key.to_string(),
        };
        let request = self.authed_json(paths::WORD_TO_MD, &body)?;
        self.send(paths::WORD_TO_MD, request).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] or [`ApiError::Http`].
    pub async fn query_demand_records(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<reqwest::Response, ApiError> {
        let request = self.authed_json(paths::QUERY_DEMAND_RECORDS, &PageRequest { page, limit })?;
        self.send(paths::QUERY_DEMAND_RECORDS, request).await
    }

    /// Save a project record. `project_data` is passed through untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] or [`ApiError::Http`].
    pub async fn insert_demand_manager(
        &self,
        project_data: serde_json::Value,
    ) -> Result<reqwest::Response, ApiError> {
        let request =
            self.authed_json(paths::INSERT_DEMAND_MANAGER, &InsertDemand { project_data })?;
        self.send(paths::INSERT_DEMAND_MANAGER, request).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] or [`ApiError::Http`].
    pub async fn delete_demand_records(&self, id: &str) -> Result<reqwest::Response, ApiError> {
        let body = DeleteDemand { id: id.to_string() };
        let request = self.authed_json(paths::DELETE_DEMAND_RECORDS, &body)?;
        self.send(paths::DELETE_DEMAND_RECORDS, request).await
    }

    /// Extract function points from a processed document.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] or [`ApiError::Http`].
    pub async fn abstract_doc_func(&self, doc_id: &str) -> Result<reqwest::Response, ApiError> {
        let body = DocRef {
            doc_id: doc_id.to_string(),
        };
        let request = self.authed_json(paths::ABSTRACT_DOC_FUNC, &body)?;
        self.send(paths::ABSTRACT_DOC_FUNC, request).await
    }
}
