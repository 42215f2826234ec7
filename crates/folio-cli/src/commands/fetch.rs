use crate::cli::GlobalFlags;
use crate::cli::root_commands::FetchArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `folio fetch`.
pub async fn handle(args: &FetchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sync = ctx.synchronizer()?;
    let fetched = sync.fetch_with_source().await;
    if args.document_only {
        output(&fetched.document, flags.format)
    } else {
        output(&fetched, flags.format)
    }
}
