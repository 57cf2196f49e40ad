use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    logged_out: bool,
    note: Option<String>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    desk_auth::logout(&ctx.store)?;

    // A token from DESK_AUTH__TOKEN or config survives logout.
    let note = ctx
        .store
        .detect_token_source()
        .map(|tier| format!("a token is still provided via {tier}"));

    output(
        &LogoutResponse {
            logged_out: true,
            note,
        },
        flags.format,
    )
}
