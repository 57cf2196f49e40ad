use crate::cli::GlobalFlags;
use crate::cli::root_commands::FeedbackArgs;
use crate::commands::shared::respond::print_response;
use crate::context::AppContext;

pub async fn handle(args: &FeedbackArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let resp = ctx.client.feedback(&args.chat_id, args.rating.clone()).await?;
    print_response(resp, flags).await
}
