use std::path::Path;

use anyhow::Context;
use desk_api::UploadFile;
use desk_core::payloads::FileQaRequest;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FileCommands;
use crate::commands::shared::respond::print_response;
use crate::context::AppContext;

pub async fn handle(action: &FileCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let resp = match action {
        FileCommands::Read { file_qa_str } => {
            warn_without_display_name(file_qa_str);
            ctx.client.read_file(file_qa_str).await?
        }
        FileCommands::Columns { file_qa_str } => {
            warn_without_display_name(file_qa_str);
            ctx.client.read_file_column(file_qa_str).await?
        }
        FileCommands::Upload { path } => ctx.client.upload_file(load_upload(path)?).await?,
        FileCommands::UploadParse {
            path,
            chat_id,
            uuid,
        } => {
            ctx.client
                .upload_file_and_parse(load_upload(path)?, chat_id.as_deref(), uuid.as_deref())
                .await?
        }
        FileCommands::LlmOut { file_key, body } => {
            ctx.client.process_file_llm_out(file_key, body).await?
        }
    };
    print_response(resp, flags).await
}

fn warn_without_display_name(file_qa_str: &str) {
    let request = FileQaRequest {
        file_qa_str: file_qa_str.to_string(),
    };
    if request.object_key() == file_qa_str {
        tracing::warn!(file_qa_str, "expected `<object key>|<display name>`");
    }
}

fn load_upload(path: &Path) -> anyhow::Result<UploadFile> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow::anyhow!("{} has no file name", path.display()))?;
    Ok(UploadFile::new(file_name, bytes))
}

#[cfg(test)]
mod tests {
    use super::load_upload;

    #[test]
    fn load_upload_uses_the_file_name() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("report.xlsx");
        std::fs::write(&path, b"PK\x03\x04").expect("write");

        let upload = load_upload(&path).expect("load");
        assert_eq!(upload.file_name, "report.xlsx");
        assert_eq!(upload.bytes, b"PK\x03\x04");
    }

    #[test]
    fn load_upload_reports_missing_file() {
        let err = load_upload(std::path::Path::new("/nonexistent/desk/file.xlsx")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
