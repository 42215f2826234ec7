use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoginArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `folio login`.
pub async fn handle(args: &LoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sync = ctx.synchronizer()?;
    let document = sync.fetch().await;
    document.check_login(&args.username, &args.password)?;
    output(&json!({ "authenticated": true, "username": args.username }), flags.format)
}
