use crate::cli::GlobalFlags;
use crate::cli::root_commands::SuggestArgs;
use crate::commands::shared::respond::print_response;
use crate::context::AppContext;

pub async fn handle(args: &SuggestArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let resp = ctx.client.suggested(&args.chat_id).await?;
    print_response(resp, flags).await
}
