//! # folio-config
//!
//! Layered configuration loading for Folio using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FOLIO_*` prefix, `__` as separator)
//! 2. Project-level `.folio/config.toml`
//! 3. User-level `~/.config/folio/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FOLIO_REMOTE__ORIGIN` -> `remote.origin`,
//! `FOLIO_SYNC__MAX_ATTEMPTS` -> `sync.max_attempts`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use folio_config::FolioConfig;
//!
//! let config = FolioConfig::load_with_dotenv().expect("config");
//! println!("store origin: {}", config.remote.origin);
//! ```

mod cache;
mod error;
mod remote;
mod server;
mod sync;

pub use cache::CacheConfig;
pub use error::ConfigError;
pub use remote::RemoteConfig;
pub use server::ServerConfig;
pub use sync::SyncConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl FolioConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails
    /// validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".folio/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("FOLIO_").split("__"))
    }

    /// Reject values that would make the synchronizer or server unusable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] or [`ConfigError::NotConfigured`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.remote.has_candidates() {
            return Err(ConfigError::NotConfigured {
                section: "remote".into(),
            });
        }
        if self.sync.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "sync.max_attempts".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.cache.slot.is_empty() || self.cache.slot.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "cache.slot".into(),
                reason: format!("'{}' is not a plain file name", self.cache.slot),
            });
        }
        if self.server.routes.iter().any(|r| !r.starts_with('/')) {
            return Err(ConfigError::InvalidValue {
                field: "server.routes".into(),
                reason: "every route must start with '/'".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("folio").join("config.toml"))
    }
}
