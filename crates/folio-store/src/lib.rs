//! # folio-store
//!
//! The remote content store: the singleton portfolio document persisted in
//! libSQL and served over HTTP with the `{success, data, message}` envelope.
//!
//! Uses the `libsql` crate (C `SQLite` fork) in local mode. The document is
//! opaque to the store: it is kept verbatim as row `id = 1` of
//! `portfolio_config` and returned unchanged.

pub mod error;
pub mod handler;
mod migrations;
pub mod server;

pub use error::StoreError;
pub use server::{ServerHandle, StoreServer};

use folio_core::document::DOCUMENT_ID;
use libsql::Builder;
use serde_json::Value;

/// Handle to the database holding the stored document.
pub struct ContentStore {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl ContentStore {
    /// Open a local database at `path` (`:memory:` for an ephemeral store).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, StoreError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        let store = Self { db, conn };
        store.run_migrations().await?;
        Ok(store)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// The stored document, or `None` before the first write.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the row is not JSON.
    pub async fn load(&self) -> Result<Option<Value>, StoreError> {
        let mut rows = self
            .conn
            .query(
                "SELECT data FROM portfolio_config WHERE id = ?1 LIMIT 1",
                [DOCUMENT_ID],
            )
            .await?;
        let Some(row) = rows.next().await? else {
            return Ok(None);
        };
        let data = row.get::<String>(0)?;
        serde_json::from_str(&data)
            .map(Some)
            .map_err(StoreError::Corrupt)
    }

    /// Timestamp of the last write, as recorded by `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn updated_at(&self) -> Result<Option<String>, StoreError> {
        let mut rows = self
            .conn
            .query(
                "SELECT updated_at FROM portfolio_config WHERE id = ?1",
                [DOCUMENT_ID],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row.get::<String>(0)?)),
            None => Ok(None),
        }
    }

    /// Replace the stored document wholesale.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if encoding or any statement fails.
    pub async fn upsert(&self, document: &Value) -> Result<(), StoreError> {
        let data = serde_json::to_string(document).map_err(StoreError::Encode)?;

        self.conn
            .execute(
                "INSERT INTO portfolio_config (id, data) VALUES (?1, ?2)
                 ON CONFLICT(id) DO UPDATE SET data = excluded.data, updated_at = CURRENT_TIMESTAMP",
                libsql::params![DOCUMENT_ID, data.as_str()],
            )
            .await?;

        tracing::debug!(bytes = data.len(), "stored document");
        Ok(())
    }
}
