use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Chat(args) => commands::chat::handle(&args, ctx, flags).await,
        Commands::Rank(args) => commands::rank::handle(&args, ctx, flags).await,
        Commands::Catalog { table } => commands::catalog::handle(&table, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
