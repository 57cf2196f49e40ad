use clap::Subcommand;

/// Chat history commands.
#[derive(Clone, Debug, Subcommand)]
pub enum HistoryCommands {
    /// List history records.
    List {
        /// Page number, starting at 1.
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Page size.
        #[arg(long)]
        limit: Option<u32>,
        /// Only records whose question contains this text.
        #[arg(long, default_value = "")]
        search: String,
        /// Only records of this chat.
        #[arg(long, default_value = "")]
        chat_id: String,
    },
    /// Delete history records.
    Delete {
        /// Record ids.
        #[arg(required = true)]
        ids: Vec<String>,
    },
}
