//! Content store server settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_bind() -> String {
    "127.0.0.1:8787".into()
}

fn default_routes() -> Vec<String> {
    vec!["/api/portfolio.php".into(), "/api/portfolio".into()]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// libSQL database file. Empty means `<data dir>/folio/portfolio.db`.
    #[serde(default)]
    pub database_path: String,

    /// Request paths answered by the store; everything else is a 404.
    #[serde(default = "default_routes")]
    pub routes: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            database_path: String::new(),
            routes: default_routes(),
        }
    }
}

impl ServerConfig {
    /// Database location, or `None` if no data dir is known.
    #[must_use]
    pub fn resolved_database_path(&self) -> Option<PathBuf> {
        if self.database_path.is_empty() {
            dirs::data_local_dir().map(|p| p.join("folio").join("portfolio.db"))
        } else {
            Some(PathBuf::from(&self.database_path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, "127.0.0.1:8787");
        assert_eq!(config.routes.len(), 2);
        if let Some(path) = config.resolved_database_path() {
            assert!(path.ends_with("folio/portfolio.db"));
        }
    }

    #[test]
    fn explicit_database_path_wins() {
        let config = ServerConfig {
            database_path: ":memory:".into(),
            ..Default::default()
        };
        assert_eq!(config.resolved_database_path(), Some(PathBuf::from(":memory:")));
    }
}
