//! # desk-api
//!
//! HTTP client for the desk chat/QA backend.
//!
//! Every operation is a `POST` under the configured origin. Bodies are JSON
//! except for the file upload endpoints. Calls return the raw
//! [`reqwest::Response`]; status and body inspection is the caller's job
//! ([`check_response`] and [`read_envelope`] help with that).
//!
//! Authenticated calls send `Authorization: Bearer <token>` from a
//! [`TokenSource`]. Login sends no `Authorization` header. Only the chat
//! call (`get_answer`) has a timeout.

mod chat;
mod demand;
mod error;
mod file;
mod http;
pub mod paths;
mod token;
mod user;

pub use error::ApiError;
pub use file::UploadFile;
pub use http::{check_response, extract_token, read_envelope};
pub use token::{StaticToken, TokenSource};

use std::sync::Arc;
use std::time::Duration;

use desk_config::ServerConfig;
use serde::Serialize;

/// Default ceiling for the long-running chat call.
pub const DEFAULT_CHAT_TIMEOUT: Duration = Duration::from_secs(10 * 60);

/// Client for the backend's `/sanic` endpoints.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    chat_timeout: Duration,
    tokens: Arc<dyn TokenSource>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("chat_timeout", &self.chat_timeout)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for `base_url` (an origin such as `https://qa.example.com`).
    ///
    /// The underlying client has no global timeout; see [`Self::with_chat_timeout`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if `base_url` is not an absolute
    /// http(s) URL, or [`ApiError::Http`] if the HTTP client fails to build.
    pub fn new(base_url: &str, tokens: Arc<dyn TokenSource>) -> Result<Self, ApiError> {
        Self::build(base_url, tokens, concat!("desk/", env!("CARGO_PKG_VERSION")))
    }

    /// Create a client from the `[server]` config section.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(config: &ServerConfig, tokens: Arc<dyn TokenSource>) -> Result<Self, ApiError> {
        Ok(Self::build(&config.base_url, tokens, &config.user_agent)?
            .with_chat_timeout(config.chat_timeout()))
    }

    fn build(base_url: &str, tokens: Arc<dyn TokenSource>, user_agent: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));
        if host.is_none_or(str::is_empty) {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            http,
            base_url: trimmed.to_string(),
            chat_timeout: DEFAULT_CHAT_TIMEOUT,
            tokens,
        })
    }

    /// Override the timeout applied to `get_answer`.
    #[must_use]
    pub const fn with_chat_timeout(mut self, timeout: Duration) -> Self {
        self.chat_timeout = timeout;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn chat_timeout(&self) -> Duration {
        self.chat_timeout
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn bearer(&self) -> Result<String, ApiError> {
        self.tokens
            .token()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ApiError::NotAuthenticated)
    }

    /// `POST` a JSON body with the bearer token attached.
    fn authed_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let token = self.bearer()?;
        Ok(self.http.post(self.url(path)).bearer_auth(token).json(body))
    }

    async fn send(
        &self,
        path: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        tracing::debug!(path, "sending request");
        let resp = request.send().await.inspect_err(|error| {
            tracing::debug!(path, %error, "request failed");
        })?;
        tracing::debug!(path, status = resp.status().as_u16(), "response received");
        Ok(resp)
    }
}
