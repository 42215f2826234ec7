use std::io::Read;

use anyhow::Context;
use folio_core::ContentDocument;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PushArgs;
use crate::commands::shared::publish;
use crate::context::AppContext;

/// Handle `folio push`.
pub async fn handle(args: &PushArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let document = read_document(&args.file)?;
    let sync = ctx.synchronizer()?;
    publish(&sync, document, json!({ "file": args.file }), flags).await
}

fn read_document(file: &str) -> anyhow::Result<ContentDocument> {
    let text = if file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read document from stdin")?;
        buf
    } else {
        std::fs::read_to_string(file).with_context(|| format!("failed to read '{file}'"))?
    };
    ContentDocument::from_json(&text).with_context(|| format!("'{file}' is not a content document"))
}
