use crate::cli::GlobalFlags;
use crate::cli::subcommands::DocCommands;
use crate::commands::shared::respond::print_response;
use crate::context::AppContext;

pub async fn handle(action: &DocCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let resp = match action {
        DocCommands::WordToMd { file_key } => ctx.client.word_to_md(file_key).await?,
        DocCommands::Abstract { doc_id } => ctx.client.abstract_doc_func(doc_id).await?,
    };
    print_response(resp, flags).await
}
