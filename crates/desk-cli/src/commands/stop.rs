use desk_core::QaType;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StopArgs;
use crate::commands::shared::respond::print_response;
use crate::context::AppContext;

pub async fn handle(args: &StopArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let qa_type = args
        .qa_type
        .as_deref()
        .map_or_else(|| ctx.config.general.qa_type(), QaType::from);
    let resp = ctx.client.stop_chat(&args.task_id, &qa_type).await?;
    print_response(resp, flags).await
}
