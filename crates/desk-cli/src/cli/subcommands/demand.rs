use clap::Subcommand;

/// Project demand record commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DemandCommands {
    /// List demand records.
    List {
        /// Page number, starting at 1.
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Page size.
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Save a project record given as JSON.
    Insert {
        /// Project record JSON.
        project_data: String,
    },
    /// Delete a demand record.
    Delete {
        /// Record id.
        id: String,
    },
}
