use std::path::Path;

use anyhow::Context;
use folio_store::{ContentStore, StoreServer};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `folio serve`: run until Ctrl-C.
pub async fn handle(args: &ServeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let server_config = &ctx.config.server;
    let bind = args.bind.as_deref().unwrap_or(&server_config.bind);
    let db_path = match &args.db {
        Some(path) => path.clone(),
        None => server_config
            .resolved_database_path()
            .context("no data directory available; set server.database_path")?
            .to_string_lossy()
            .into_owned(),
    };
    ensure_parent_dir(&db_path)?;

    let store = ContentStore::open_local(&db_path)
        .await
        .with_context(|| format!("failed to open content store at {db_path}"))?;
    let handle = StoreServer::bind(bind, store, server_config.routes.clone())?.spawn()?;

    output(
        &json!({
            "listening": handle.base_url(),
            "routes": server_config.routes,
            "database": db_path,
        }),
        flags.format,
    )?;

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    handle.shutdown().await;
    Ok(())
}

fn ensure_parent_dir(db_path: &str) -> anyhow::Result<()> {
    if db_path == ":memory:" {
        return Ok(());
    }
    if let Some(parent) = Path::new(db_path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ensure_parent_dir;

    #[test]
    fn creates_missing_database_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        let db = tmp.path().join("nested").join("portfolio.db");
        ensure_parent_dir(db.to_str().unwrap()).unwrap();
        assert!(tmp.path().join("nested").is_dir());
    }

    #[test]
    fn memory_database_needs_no_directory() {
        ensure_parent_dir(":memory:").unwrap();
    }
}
