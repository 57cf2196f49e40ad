use std::io::Write;

use anyhow::Context;
use desk_core::QaType;
use desk_core::payloads::ChatQuery;
use futures::StreamExt;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChatArgs;
use crate::commands::shared::parse::parse_json;
use crate::context::AppContext;

/// Ask a question and copy the streamed answer to stdout as it arrives.
pub async fn handle(args: &ChatArgs, ctx: &AppContext, _flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = build_query(args, ctx.config.general.qa_type())?;
    tracing::debug!(chat_id = %query.chat_id, uuid = %query.uuid, qa_type = %query.qa_type, "asking");

    let resp = ctx.client.get_answer(&query).await?;
    let resp = desk_api::check_response(resp).await?;

    let mut stream = resp.bytes_stream();
    let mut stdout = std::io::stdout().lock();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("answer stream interrupted")?;
        stdout.write_all(&chunk)?;
        stdout.flush()?;
    }
    writeln!(stdout)?;
    Ok(())
}

fn build_query(args: &ChatArgs, default_qa_type: QaType) -> anyhow::Result<ChatQuery> {
    let qa_type = args
        .qa_type
        .as_deref()
        .map_or(default_qa_type, QaType::from);
    if !qa_type.is_well_known() {
        tracing::warn!(%qa_type, "unrecognized qa type; sending as given");
    }

    let uuid = args
        .uuid
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let chat_id = args
        .chat_id
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let files = args
        .files
        .iter()
        .map(|raw| parse_json(raw, "file"))
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(ChatQuery::new(&args.query, qa_type, uuid, chat_id).with_files(files))
}
