//! File QA endpoints: upload, parse, and spreadsheet inspection.

use desk_core::payloads::FileQaRequest;

use crate::{ApiClient, error::ApiError, paths};

/// Multipart field name for uploads.
const FILE_FIELD: &str = "file";

/// A file to upload, already read into memory.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    fn into_form(self) -> reqwest::multipart::Form {
        let part = reqwest::multipart::Part::bytes(self.bytes).file_name(self.file_name);
        reqwest::multipart::Form::new().part(FILE_FIELD, part)
    }
}

impl ApiClient {
    /// Read the first rows of an uploaded spreadsheet.
    ///
    /// `file_qa_str` is `<object key>|<display name>` as returned by upload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] or [`ApiError::Http`].
    pub async fn read_file(&self, file_qa_str: &str) -> Result<reqwest::Response, ApiError> {
        let body = FileQaRequest {
            file_qa_str: file_qa_str.to_string(),
        };
        let request = self.authed_json(paths::READ_FILE, &body)?;
        self.send(paths::READ_FILE, request).await
    }

    /// Read the column headers of an uploaded spreadsheet.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] or [`ApiError::Http`].
    pub async fn read_file_column(
        &self,
        file_qa_str: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let body = FileQaRequest {
            file_qa_str: file_qa_str.to_string(),
        };
        let request = self.authed_json(paths::READ_FILE_COLUMN, &body)?;
        self.send(paths::READ_FILE_COLUMN, request).await
    }

    /// Upload a file to object storage. The response carries its object key.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] or [`ApiError::Http`].
    pub async fn upload_file(&self, file: UploadFile) -> Result<reqwest::Response, ApiError> {
        let token = self.bearer()?;
        let request = self
            .http
            .post(self.url(paths::UPLOAD_FILE))
            .bearer_auth(token)
            .multipart(file.into_form());
        self.send(paths::UPLOAD_FILE, request).await
    }

    /// Upload a file and have the backend parse it.
    ///
    /// With both `chat_id` and the token present, the backend also records
    /// the file against that chat so later questions can reuse it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] or [`ApiError::Http`].
    pub async fn upload_file_and_parse(
        &self,
        file: UploadFile,
        chat_id: Option<&str>,
        uuid: Option<&str>,
    ) -> Result<reqwest::Response, ApiError> {
        let token = self.bearer()?;
        let url = with_query(
            self.url(paths::UPLOAD_FILE_AND_PARSE),
            &[("chat_id", chat_id), ("uuid", uuid)],
        );
        let request = self
            .http
            .post(url)
            .bearer_auth(token)
            .multipart(file.into_form());
        self.send(paths::UPLOAD_FILE_AND_PARSE, request).await
    }

    /// Hand the model's raw output for a file question to the backend,
    /// which runs the SQL it contains against the file.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] or [`ApiError::Http`].
    pub async fn process_file_llm_out(
        &self,
        file_key: &str,
        llm_output: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let token = self.bearer()?;
        let url = with_query(
            self.url(paths::PROCESS_FILE_LLM_OUT),
            &[("file_key", Some(file_key))],
        );
        let request = self
            .http
            .post(url)
            .bearer_auth(token)
            .header(reqwest::header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(llm_output.to_string());
        self.send(paths::PROCESS_FILE_LLM_OUT, request).await
    }
}

/// Append the present parameters as a percent-encoded query string.
fn with_query(mut url: String, params: &[(&str, Option<&str>)]) -> String {
    let mut sep = '?';
    for (key, value) in params {
        if let Some(value) = value {
            url.push(sep);
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
            sep = '&';
        }
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_query_skips_absent_params() {
        let url = with_query("http://h/p".into(), &[("chat_id", None), ("uuid", Some("u-1"))]);
        assert_eq!(url, "http://h/p?uuid=u-1");
    }

    #[test]
    fn with_query_encodes_values() {
        let url = with_query(
            "http://h/p".into(),
            &[("file_key", Some("a b/c.xlsx")), ("x", Some("1"))],
        );
        assert_eq!(url, "http://h/p?file_key=a%20b%2Fc.xlsx&x=1");
    }

    #[test]
    fn with_query_without_params_is_unchanged() {
        assert_eq!(with_query("http://h/p".into(), &[]), "http://h/p");
    }
}
