use anyhow::Context;
use folio_config::FolioConfig;
use folio_sync::{FileCache, HttpRemote, Synchronizer};

/// Shared application resources for one command invocation.
pub struct AppContext {
    pub config: FolioConfig,
}

impl AppContext {
    #[must_use]
    pub const fn new(config: FolioConfig) -> Self {
        Self { config }
    }

    /// Synchronizer over the configured endpoints and cache slot.
    pub fn synchronizer(&self) -> anyhow::Result<Synchronizer<HttpRemote, FileCache>> {
        Synchronizer::from_config(&self.config).context("failed to initialize content synchronizer")
    }
}
