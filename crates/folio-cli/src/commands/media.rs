use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MediaCommands;
use crate::commands::shared::publish;
use crate::context::AppContext;
use crate::output::output;

/// Handle `folio media`.
pub async fn handle(action: &MediaCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sync = ctx.synchronizer()?;
    let mut draft = sync.fetch().await;

    match action {
        MediaCommands::List => output(&draft.media_library, flags.format),
        MediaCommands::Add { url } => {
            draft.add_media(url.as_str());
            let library = draft.media_library.clone();
            publish(&sync, draft, json!({ "media_library": library }), flags).await
        }
        MediaCommands::Remove { url } => {
            let removed = draft.remove_media(url);
            if removed == 0 {
                tracing::info!(url, "not in media library; nothing to publish");
                return output(&json!({ "removed": 0 }), flags.format);
            }
            let library = draft.media_library.clone();
            publish(
                &sync,
                draft,
                json!({ "removed": removed, "media_library": library }),
                flags,
            )
            .await
        }
    }
}
