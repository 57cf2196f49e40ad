use base64::Engine as _;
use chrono::{DateTime, Utc};

use crate::error::AuthError;

/// Decode the `exp` claim of a JWT session token without verifying it.
///
/// The backend's tokens are JWTs, but nothing client-side can check the
/// signature; this is for status display only.
///
/// # Errors
///
/// Returns `AuthError::Other` if the token is not a JWT or the `exp` claim
/// is missing or cannot be parsed.
pub fn decode_expiry(jwt: &str) -> Result<DateTime<Utc>, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::Other("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| AuthError::Other(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::Other(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::Other("missing exp claim".into()))?;
    DateTime::from_timestamp(exp, 0).ok_or_else(|| AuthError::Other("invalid exp timestamp".into()))
}

/// Whether the token expires within `buffer_secs`. Tokens whose expiry
/// cannot be read are treated as not expiring.
#[must_use]
pub fn expires_within(jwt: &str, buffer_secs: i64) -> bool {
    decode_expiry(jwt).is_ok_and(|exp| exp.timestamp() - Utc::now().timestamp() <= buffer_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_jwt_with_exp(exp: i64) -> String {
        let header = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .encode(format!(r#"{{"id":7,"username":"admin","exp":{exp}}}"#));
        let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode("fake_sig");
        format!("{header}.{payload}.{signature}")
    }

    #[test]
    fn decode_expiry_valid_jwt() {
        let future_exp = Utc::now().timestamp() + 3600;
        let dt = decode_expiry(&make_jwt_with_exp(future_exp)).unwrap();
        assert_eq!(dt.timestamp(), future_exp);
    }

    #[test]
    fn decode_expiry_invalid_format() {
        let err = decode_expiry("opaque-session-token").unwrap_err();
        assert!(err.to_string().contains("invalid JWT format"));
    }

    #[test]
    fn decode_expiry_missing_exp_claim() {
        let header = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"id":7}"#);
        let jwt = format!("{header}.{payload}.sig");

        let err = decode_expiry(&jwt).unwrap_err();
        assert!(err.to_string().contains("missing exp claim"));
    }

    #[test]
    fn decode_expiry_bad_base64() {
        let err = decode_expiry("header.!!!invalid!!!.signature").unwrap_err();
        assert!(err.to_string().contains("base64 decode failed"));
    }

    #[test]
    fn expired_token_expires_within_buffer() {
        let jwt = make_jwt_with_exp(Utc::now().timestamp() - 10);
        assert!(expires_within(&jwt, 60));
    }

    #[test]
    fn fresh_token_does_not_expire_within_buffer() {
        let jwt = make_jwt_with_exp(Utc::now().timestamp() + 3600);
        assert!(!expires_within(&jwt, 60));
    }

    #[test]
    fn opaque_token_never_reports_expiry() {
        assert!(!expires_within("opaque", 60));
    }
}
