use std::path::PathBuf;

use clap::Subcommand;

/// File QA commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FileCommands {
    /// Show the first rows of an uploaded spreadsheet.
    Read {
        /// `<object key>|<display name>` as returned by upload.
        file_qa_str: String,
    },
    /// Show the columns of an uploaded spreadsheet.
    Columns {
        /// `<object key>|<display name>` as returned by upload.
        file_qa_str: String,
    },
    /// Upload a file.
    Upload {
        /// Local file path.
        path: PathBuf,
    },
    /// Upload a file and have the backend parse it.
    UploadParse {
        /// Local file path.
        path: PathBuf,
        /// Record the file against this chat.
        #[arg(long)]
        chat_id: Option<String>,
        /// Message uuid for the history record.
        #[arg(long)]
        uuid: Option<String>,
    },
    /// Run the SQL contained in model output against an uploaded file.
    LlmOut {
        /// Object key of the file.
        file_key: String,
        /// Raw model output.
        body: String,
    },
}
