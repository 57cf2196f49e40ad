use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Tokens this close to expiry are reported as expiring.
const EXPIRY_WARNING_SECS: i64 = 300;

#[derive(Serialize)]
struct StatusResponse {
    authenticated: bool,
    token_source: Option<String>,
    expires_at: Option<String>,
    expiring: bool,
    base_url: String,
    chat_timeout_secs: u64,
    default_qa_type: String,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let token = ctx.store.load();
    let expires_at = token
        .as_deref()
        .and_then(|token| desk_auth::expiry::decode_expiry(token).ok())
        .map(|at| at.to_rfc3339());
    let expiring = token
        .as_deref()
        .is_some_and(|token| desk_auth::expiry::expires_within(token, EXPIRY_WARNING_SECS));

    output(
        &StatusResponse {
            authenticated: token.is_some(),
            token_source: ctx.store.detect_token_source().map(|tier| tier.to_string()),
            expires_at,
            expiring,
            base_url: ctx.client.base_url().to_string(),
            chat_timeout_secs: ctx.client.chat_timeout().as_secs(),
            default_qa_type: ctx.config.general.qa_type().to_string(),
        },
        flags.format,
    )
}
