use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Fetch(args) => commands::fetch::handle(&args, ctx, flags).await,
        Commands::Push(args) => commands::push::handle(&args, ctx, flags).await,
        Commands::Media { action } => commands::media::handle(&action, ctx, flags).await,
        Commands::Login(args) => commands::login::handle(&args, ctx, flags).await,
        Commands::Endpoints => commands::endpoints::handle(ctx, flags),
        Commands::Serve(args) => commands::serve::handle(&args, ctx, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
