use clap::{Args, Subcommand};

use crate::cli::subcommands::{DemandCommands, DocCommands, FileCommands, HistoryCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in and store the session token.
    Login(LoginArgs),
    /// Clear the stored session token.
    Logout,
    /// Show session and backend settings.
    Status,
    /// Ask a question; the answer is streamed to stdout.
    Chat(ChatArgs),
    /// Stop a running chat task.
    Stop(StopArgs),
    /// Chat history.
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },
    /// Rate an answer.
    Feedback(FeedbackArgs),
    /// Suggested follow-up questions for a chat.
    Suggest(SuggestArgs),
    /// Document processing.
    Doc {
        #[command(subcommand)]
        action: DocCommands,
    },
    /// Project demand records.
    Demand {
        #[command(subcommand)]
        action: DemandCommands,
    },
    /// File upload and file QA helpers.
    File {
        #[command(subcommand)]
        action: FileCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    /// Account name.
    #[arg(short, long)]
    pub username: String,
    /// Password; prompted for on stdin when omitted.
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// The question.
    pub query: String,
    /// QA mode (e.g. COMMON_QA, DATABASE_QA, FILEDATA_QA, REPORT_QA).
    #[arg(long)]
    pub qa_type: Option<String>,
    /// Conversation id; a new one is generated when omitted.
    #[arg(long)]
    pub chat_id: Option<String>,
    /// Message uuid; a new one is generated when omitted.
    #[arg(long)]
    pub uuid: Option<String>,
    /// Attached file descriptor as JSON (repeatable).
    #[arg(long = "file")]
    pub files: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct StopArgs {
    /// Task id reported by the chat stream.
    pub task_id: String,
    /// QA mode of the running task.
    #[arg(long)]
    pub qa_type: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct FeedbackArgs {
    /// Chat id of the rated answer.
    pub chat_id: String,
    /// Rating value, sent as written (`1` stays an integer).
    pub rating: serde_json::Number,
}

#[derive(Clone, Debug, Args)]
pub struct SuggestArgs {
    /// Chat id to get suggestions for.
    pub chat_id: String,
}
