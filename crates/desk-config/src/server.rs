//! Backend connection configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_base_url() -> String {
    "http://127.0.0.1:8088".to_string()
}

/// Ceiling for the long-running chat call.
const fn default_chat_timeout_secs() -> u64 {
    600
}

fn default_user_agent() -> String {
    format!("desk/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Backend origin; endpoint paths (`/sanic/...`) are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for `/sanic/dify/get_answer`, in seconds. No other call is bounded.
    #[serde(default = "default_chat_timeout_secs")]
    pub chat_timeout_secs: u64,

    /// `User-Agent` sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            chat_timeout_secs: default_chat_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ServerConfig {
    /// The base URL is an absolute http(s) origin.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.base_url.starts_with("http://") || self.base_url.starts_with("https://")
    }

    #[must_use]
    pub const fn chat_timeout(&self) -> Duration {
        Duration::from_secs(self.chat_timeout_secs)
    }
}
