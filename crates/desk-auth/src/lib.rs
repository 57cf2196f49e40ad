//! # desk-auth
//!
//! Session token handling for desk.
//!
//! Provides the [`SessionStore`] (OS keychain via `keyring`, an env/config
//! token, and a `0600` credentials file), the login flow that fills it, and
//! best-effort JWT expiry decoding for status display.

pub mod error;
pub mod expiry;
pub mod login;
pub mod token_store;

pub use error::AuthError;
pub use login::login;
pub use token_store::{SessionStore, TokenTier};

/// Clear stored credentials.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn logout(store: &SessionStore) -> Result<(), AuthError> {
    store.delete()
}
