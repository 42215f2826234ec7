//! Local durable cache location.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_slot() -> String {
    "portfolio_backup".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Directory holding the cache slot. Empty means the platform data dir
    /// (`~/.local/share/folio` on Linux).
    #[serde(default)]
    pub dir: String,

    /// Name of the single cache slot; the file is `<dir>/<slot>.json`.
    #[serde(default = "default_slot")]
    pub slot: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            slot: default_slot(),
        }
    }
}

impl CacheConfig {
    /// Directory the slot file lives in, or `None` if no data dir is known.
    #[must_use]
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        if self.dir.is_empty() {
            dirs::data_local_dir().map(|p| p.join("folio"))
        } else {
            Some(PathBuf::from(&self.dir))
        }
    }

    /// Full path of the slot file.
    #[must_use]
    pub fn slot_path(&self) -> Option<PathBuf> {
        self.resolved_dir()
            .map(|dir| dir.join(format!("{}.json", self.slot)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_is_used_verbatim() {
        let config = CacheConfig {
            dir: "/tmp/folio-cache".into(),
            ..Default::default()
        };
        assert_eq!(
            config.slot_path(),
            Some(PathBuf::from("/tmp/folio-cache/portfolio_backup.json"))
        );
    }

    #[test]
    fn default_dir_is_under_platform_data_dir() {
        let config = CacheConfig::default();
        if let Some(dir) = config.resolved_dir() {
            assert!(dir.ends_with("folio"));
        }
    }
}
