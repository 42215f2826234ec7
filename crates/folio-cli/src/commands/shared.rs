use folio_core::ContentDocument;
use folio_sync::{ContentCache, RemoteStore, SyncOutcome, Synchronizer};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PublishResponse<'a, T: Serialize> {
    sequence: u64,
    outcome: &'a SyncOutcome,
    #[serde(flatten)]
    detail: T,
}

/// Write `document` through the synchronizer, wait for the store, print the
/// outcome plus `detail`, and fail if the store never accepted it.
pub async fn publish<R, C, T>(
    sync: &Synchronizer<R, C>,
    document: ContentDocument,
    detail: T,
    flags: &GlobalFlags,
) -> anyhow::Result<()>
where
    R: RemoteStore,
    C: ContentCache,
    T: Serialize,
{
    let ticket = sync.update(document)?;
    let sequence = ticket.sequence();
    let outcome = ticket.persisted().await;

    output(
        &PublishResponse {
            sequence,
            outcome: &outcome,
            detail,
        },
        flags.format,
    )?;

    if let SyncOutcome::Failed { errors } = &outcome {
        anyhow::bail!(
            "store rejected the document on every endpoint ({} attempts); it is kept in the local cache",
            errors.len()
        );
    }
    Ok(())
}
