use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Check a backend response and print its JSON body.
///
/// Non-2xx statuses and envelopes with a failure code become errors.
/// A non-JSON body is printed as text.
pub async fn print_response(resp: reqwest::Response, flags: &GlobalFlags) -> anyhow::Result<()> {
    let resp = desk_api::check_response(resp).await?;
    let text = resp.text().await.context("failed to read response body")?;

    let Ok(body) = serde_json::from_str::<serde_json::Value>(&text) else {
        println!("{text}");
        return Ok(());
    };
    ensure_success(&body)?;
    output(&body, flags.format)
}

/// Fail on an envelope whose `code` is present and not the success code.
fn ensure_success(body: &serde_json::Value) -> anyhow::Result<()> {
    let Some(code) = body.get("code").and_then(serde_json::Value::as_i64) else {
        return Ok(());
    };
    if code == desk_core::envelope::SUCCESS_CODE {
        return Ok(());
    }
    let msg = body
        .get("msg")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default();
    Err(desk_core::CoreError::Backend {
        code,
        msg: msg.to_string(),
    }
    .into())
}
