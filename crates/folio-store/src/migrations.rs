//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::ContentStore;
use crate::error::StoreError;

const MIGRATION_001: &str = include_str!("../migrations/001_portfolio.sql");

impl ContentStore {
    pub(crate) async fn run_migrations(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| StoreError::Migration(format!("001_portfolio: {e}")))?;
        Ok(())
    }
}
