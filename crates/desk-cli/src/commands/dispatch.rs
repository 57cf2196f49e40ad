use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Login(args) => commands::login::handle(&args, ctx, flags).await,
        Commands::Logout => commands::logout::handle(ctx, flags),
        Commands::Status => commands::status::handle(ctx, flags),
        Commands::Chat(args) => commands::chat::handle(&args, ctx, flags).await,
        Commands::Stop(args) => commands::stop::handle(&args, ctx, flags).await,
        Commands::History { action } => commands::history::handle(&action, ctx, flags).await,
        Commands::Feedback(args) => commands::feedback::handle(&args, ctx, flags).await,
        Commands::Suggest(args) => commands::suggest::handle(&args, ctx, flags).await,
        Commands::Doc { action } => commands::doc::handle(&action, ctx, flags).await,
        Commands::Demand { action } => commands::demand::handle(&action, ctx, flags).await,
        Commands::File { action } => commands::file::handle(&action, ctx, flags).await,
    }
}
