//! Response helpers for callers of [`crate::ApiClient`].
//!
//! Request functions hand back the raw response. These helpers do the
//! status-code checks (429 with `Retry-After` parsing, non-success into
//! [`ApiError::Api`]) and the envelope decoding a caller usually wants next.

use desk_core::{ApiEnvelope, CoreError};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`ApiError::RateLimited`]; `Retry-After`
///   falls back to 60 s if absent or unparseable.
/// - **Non-success status** → [`ApiError::Api`] with status code and body.
///
/// # Errors
///
/// See above.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(ApiError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        return Err(ApiError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Check the status, then decode the body as `{code, msg, data}`.
///
/// The envelope is returned as-is; use [`ApiEnvelope::into_result`] to turn a
/// failure code into an error.
///
/// # Errors
///
/// Returns the [`check_response`] errors, or [`ApiError::Http`] if the body
/// is not a valid envelope.
pub async fn read_envelope<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<ApiEnvelope<T>, ApiError> {
    let resp = check_response(resp).await?;
    Ok(resp.json::<ApiEnvelope<T>>().await?)
}

/// Find the session token in a login response body.
///
/// Looks at `data.token` first, then a top-level `token`.
///
/// # Errors
///
/// Returns [`CoreError::Backend`] if the envelope reports failure, or
/// [`CoreError::Validation`] if no non-empty token is present.
pub fn extract_token(body: &serde_json::Value) -> Result<String, ApiError> {
    if let Some(code) = body.get("code").and_then(serde_json::Value::as_i64)
        && code != desk_core::envelope::SUCCESS_CODE
    {
        let msg = body
            .get("msg")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string();
        return Err(CoreError::Backend { code, msg }.into());
    }

    body.pointer("/data/token")
        .or_else(|| body.get("token"))
        .and_then(serde_json::Value::as_str)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .ok_or_else(|| CoreError::Validation("login response carries no token".into()).into())
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body("")
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_non_numeric() {
        let resp = mock_response_with_retry_after(429, "Wed, 21 Oct 2026 07:28:00 GMT");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[tokio::test]
    async fn check_response_rate_limited_default() {
        let err = check_response(mock_response(429, "")).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::RateLimited {
                retry_after_secs: 60
            }
        ));
    }

    #[tokio::test]
    async fn check_response_keeps_error_body() {
        let err = check_response(mock_response(401, "token expired"))
            .await
            .unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "token expired");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200, "")).await.is_ok());
    }

    #[tokio::test]
    async fn read_envelope_decodes_data() {
        let resp = mock_response(200, r#"{"code":200,"msg":"ok","data":{"total":3}}"#);
        let env: ApiEnvelope<serde_json::Value> = read_envelope(resp).await.unwrap();
        assert!(env.is_success());
        assert_eq!(env.data.unwrap()["total"], 3);
    }

    #[test]
    fn extract_token_from_data() {
        let body = json!({"code": 200, "msg": "ok", "data": {"token": "eyJ.abc.def"}});
        assert_eq!(extract_token(&body).unwrap(), "eyJ.abc.def");
    }

    #[test]
    fn extract_token_from_top_level() {
        let body = json!({"token": "plain-token"});
        assert_eq!(extract_token(&body).unwrap(), "plain-token");
    }

    #[test]
    fn extract_token_reports_backend_failure() {
        let body = json!({"code": 400, "msg": "bad credentials", "data": null});
        let err = extract_token(&body).unwrap_err();
        assert!(err.to_string().contains("bad credentials"));
    }

    #[test]
    fn extract_token_rejects_empty() {
        let body = json!({"code": 200, "data": {"token": ""}});
        assert!(matches!(
            extract_token(&body),
            Err(ApiError::Core(CoreError::Validation(_)))
        ));
    }
}
