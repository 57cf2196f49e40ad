use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoginArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::prompt;

#[derive(Serialize)]
struct LoginResponse {
    authenticated: bool,
    username: String,
    token_source: Option<String>,
    expires_at: Option<String>,
}

pub async fn handle(args: &LoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => prompt::read_password()?,
    };

    let token = desk_auth::login(&ctx.client, &ctx.store, &args.username, &password).await?;

    output(
        &LoginResponse {
            authenticated: true,
            username: args.username.clone(),
            token_source: ctx.store.detect_token_source().map(|tier| tier.to_string()),
            expires_at: desk_auth::expiry::decode_expiry(&token)
                .ok()
                .map(|at| at.to_rfc3339()),
        },
        flags.format,
    )
}
