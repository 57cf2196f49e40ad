use clap::Subcommand;

/// Document processing commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DocCommands {
    /// Convert an uploaded Word document to Markdown.
    WordToMd {
        /// Object key returned by upload.
        file_key: String,
    },
    /// Extract function points from a document.
    Abstract {
        /// Document id.
        doc_id: String,
    },
}
