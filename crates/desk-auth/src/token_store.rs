use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use desk_api::TokenSource;
use desk_config::AuthConfig;
use serde::Serialize;

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "desk-cli";
const KEYRING_USER: &str = "session-token";
const CREDENTIALS_FILE_NAME: &str = "credentials";
const TOKEN_ENV_VAR: &str = "DESK_AUTH__TOKEN";

/// Where a loaded token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenTier {
    Keyring,
    Env,
    File,
}

impl fmt::Display for TokenTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        })
    }
}

/// The session store the bearer token is read from.
///
/// Load priority: keyring → env/config token → credentials file
/// (`~/.desk/credentials`). Writes go to the keyring, falling back to the
/// file when no keychain is available.
#[derive(Clone)]
pub struct SessionStore {
    keyring_service: Option<String>,
    env_token: Option<String>,
    credentials_path: Option<PathBuf>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("keyring_service", &self.keyring_service)
            .field("env_token", &self.env_token.as_ref().map(|_| "<set>"))
            .field("credentials_path", &self.credentials_path)
            .finish()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_KEYRING_SERVICE)
    }
}

impl SessionStore {
    /// A store using the given keyring service, `DESK_AUTH__TOKEN`, and
    /// `~/.desk/credentials`.
    #[must_use]
    pub fn new(keyring_service: &str) -> Self {
        Self {
            keyring_service: Some(keyring_service.to_string()),
            env_token: std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty()),
            credentials_path: default_credentials_path(),
        }
    }

    /// A store configured from the `[auth]` section. A configured `token`
    /// takes the env tier.
    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        let mut store = Self::new(&config.keyring_service);
        if config.has_token() {
            store.env_token = Some(config.token.clone());
        }
        store
    }

    /// A store backed only by a credentials file, with no keyring and no env
    /// tier. Used for headless hosts and tests.
    #[must_use]
    pub fn file_only(path: impl Into<PathBuf>) -> Self {
        Self {
            keyring_service: None,
            env_token: None,
            credentials_path: Some(path.into()),
        }
    }

    #[must_use]
    pub fn credentials_path(&self) -> Option<&Path> {
        self.credentials_path.as_deref()
    }

    /// Store a token in the OS keychain. Falls back to file if keyring unavailable.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if both keyring and file storage fail.
    pub fn store(&self, token: &str) -> Result<(), AuthError> {
        let Some(entry) = self.keyring_entry() else {
            return self.store_file(token);
        };
        match entry {
            Ok(entry) => match entry.set_password(token) {
                Ok(()) => Ok(()),
                Err(error) => {
                    tracing::warn!(%error, "keyring store failed; falling back to file");
                    self.store_file(token)
                }
            },
            Err(error) => {
                tracing::warn!(%error, "keyring unavailable; falling back to file");
                self.store_file(token)
            }
        }
    }

    /// Load the token from the highest-priority tier that has one.
    #[must_use]
    pub fn load(&self) -> Option<String> {
        self.load_with_tier().map(|(token, _)| token)
    }

    /// Which tier the current token comes from (for status display).
    #[must_use]
    pub fn detect_token_source(&self) -> Option<TokenTier> {
        self.load_with_tier().map(|(_, tier)| tier)
    }

    /// Delete stored credentials from keyring and file.
    ///
    /// The env tier is not touched; a token set there stays in effect.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
    pub fn delete(&self) -> Result<(), AuthError> {
        // Missing entries are fine.
        if let Some(Ok(entry)) = self.keyring_entry() {
            let _ = entry.delete_credential();
        }

        if let Some(path) = &self.credentials_path
            && path.exists()
        {
            fs::remove_file(path).map_err(|e| {
                AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
            })?;
        }

        Ok(())
    }

    fn load_with_tier(&self) -> Option<(String, TokenTier)> {
        if let Some(Ok(entry)) = self.keyring_entry()
            && let Ok(token) = entry.get_password()
            && !token.is_empty()
        {
            return Some((token, TokenTier::Keyring));
        }

        if let Some(token) = &self.env_token {
            return Some((token.clone(), TokenTier::Env));
        }

        self.load_file().map(|token| (token, TokenTier::File))
    }

    fn keyring_entry(&self) -> Option<keyring::Result<keyring::Entry>> {
        self.keyring_service
            .as_deref()
            .map(|service| keyring::Entry::new(service, KEYRING_USER))
    }

    fn store_file(&self, token: &str) -> Result<(), AuthError> {
        let path = self.credentials_path.as_ref().ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found — cannot store credentials".into())
        })?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(path, token)
            .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::TokenStoreError(format!("chmod {}: {e}", path.display()))
            })?;
        }

        Ok(())
    }

    fn load_file(&self) -> Option<String> {
        let path = self.credentials_path.as_ref()?;
        fs::read_to_string(path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

impl TokenSource for SessionStore {
    fn token(&self) -> Option<String> {
        self.load()
    }
}

fn default_credentials_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".desk").join(CREDENTIALS_FILE_NAME))
}
