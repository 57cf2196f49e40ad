use desk_core::payloads::UserRecordQuery;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HistoryCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::respond::print_response;
use crate::context::AppContext;

pub async fn handle(
    action: &HistoryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let resp = match action {
        HistoryCommands::List {
            page,
            limit,
            search,
            chat_id,
        } => {
            let query = UserRecordQuery {
                page: *page,
                limit: effective_limit(*limit, flags.limit, ctx.config.general.default_limit),
                search_text: search.clone(),
                chat_id: chat_id.clone(),
            };
            ctx.client.query_user_record(&query).await?
        }
        HistoryCommands::Delete { ids } => ctx.client.delete_user_record(ids).await?,
    };
    print_response(resp, flags).await
}
