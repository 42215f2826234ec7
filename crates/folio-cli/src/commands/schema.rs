use folio_core::ContentDocument;
use folio_core::responses::StoreEnvelope;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaTarget};
use crate::output::output;

/// Handle `folio schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.target {
        SchemaTarget::Document => schemars::schema_for!(ContentDocument),
        SchemaTarget::Envelope => schemars::schema_for!(StoreEnvelope),
    };
    output(&schema, flags.format)
}
