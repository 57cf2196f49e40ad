//! Session token storage configuration.

use serde::{Deserialize, Serialize};

fn default_keyring_service() -> String {
    "desk-cli".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// OS keychain service name the session token is stored under.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Token supplied out-of-band (CI). Takes the env tier in the token store.
    #[serde(default)]
    pub token: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            keyring_service: default_keyring_service(),
            token: String::new(),
        }
    }
}

impl AuthConfig {
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}
