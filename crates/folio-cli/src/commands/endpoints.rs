use folio_sync::endpoints;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `folio endpoints`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let resolved = endpoints::resolve(&ctx.config.remote)?;
    output(&resolved, flags.format)
}
