use desk_api::{ApiClient, ApiError};
use desk_core::payloads::LoginRequest;

use crate::error::AuthError;
use crate::token_store::SessionStore;

/// Log in with username and password and persist the session token.
///
/// Returns the token that was stored.
///
/// # Errors
///
/// Returns `AuthError::LoginFailed` if the request fails, the backend
/// rejects the credentials, or the response carries no token, and
/// `AuthError::TokenStoreError` if the token cannot be stored.
pub async fn login(
    client: &ApiClient,
    store: &SessionStore,
    username: &str,
    password: &str,
) -> Result<String, AuthError> {
    let credentials = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    let resp = desk_api::check_response(client.login(&credentials).await?).await?;
    let body: serde_json::Value = resp.json().await.map_err(ApiError::from)?;
    let token = desk_api::extract_token(&body)?;

    store.store(&token)?;
    tracing::debug!(username, "session token stored");
    Ok(token)
}
