//! Local durable cache: a single named slot holding the last written document.
//!
//! The slot is always overwritten wholesale; there is no merge.

use folio_config::CacheConfig;
use folio_core::ContentDocument;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::{CacheError, SyncError};

/// Synchronous read/write access to the cache slot.
pub trait ContentCache: Send + Sync + 'static {
    /// Read the slot. `Ok(None)` when nothing has been written yet.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the slot exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<ContentDocument>, CacheError>;

    /// Overwrite the slot.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the document cannot be written.
    fn store(&self, document: &ContentDocument) -> Result<(), CacheError>;
}

/// Slot stored as `<dir>/<slot>.json`.
#[derive(Debug, Clone)]
pub struct FileCache {
    path: PathBuf,
}

impl FileCache {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Cache at the location described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::NoCacheDir`] if `cache.dir` is empty and the
    /// platform has no data directory.
    pub fn from_config(config: &CacheConfig) -> Result<Self, SyncError> {
        config
            .slot_path()
            .map(Self::new)
            .ok_or(SyncError::NoCacheDir)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> CacheError {
        CacheError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ContentCache for FileCache {
    fn load(&self) -> Result<Option<ContentDocument>, CacheError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        if text.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&text)
            .map(Some)
            .map_err(CacheError::Corrupt)
    }

    fn store(&self, document: &ContentDocument) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| CacheError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let json = serde_json::to_vec(document).map_err(CacheError::Serialize)?;

        // Write-then-rename so a crash never leaves a truncated slot behind.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))
    }
}

/// In-process slot; lives as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryCache {
    slot: Mutex<Option<ContentDocument>>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache pre-filled with `document`.
    #[must_use]
    pub fn with_document(document: ContentDocument) -> Self {
        Self {
            slot: Mutex::new(Some(document)),
        }
    }
}

impl ContentCache for MemoryCache {
    fn load(&self) -> Result<Option<ContentDocument>, CacheError> {
        Ok(self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn store(&self, document: &ContentDocument) -> Result<(), CacheError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(document.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_is_empty_slot() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let cache = FileCache::new(tmp.path().join("portfolio_backup.json"));
        assert!(cache.load().unwrap().is_none());
    }

    #[test]
    fn store_then_load_returns_same_document() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let cache = FileCache::new(tmp.path().join("nested").join("portfolio_backup.json"));

        let mut doc = ContentDocument::default();
        doc.hero.title1 = "Cached".into();
        cache.store(&doc).unwrap();

        assert_eq!(cache.load().unwrap(), Some(doc));
        assert!(
            !cache.path().with_extension("json.tmp").exists(),
            "temp file should be renamed away"
        );
    }

    #[test]
    fn store_overwrites_wholesale() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let cache = FileCache::new(tmp.path().join("slot.json"));

        let mut first = ContentDocument::default();
        first.media_library = vec!["a.png".into(), "b.png".into()];
        cache.store(&first).unwrap();

        let second = ContentDocument::default();
        cache.store(&second).unwrap();

        assert!(cache.load().unwrap().unwrap().media_library.is_empty());
    }

    #[test]
    fn garbage_is_reported_as_corrupt() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("slot.json");
        std::fs::write(&path, "{not json").unwrap();

        let cache = FileCache::new(&path);
        assert!(matches!(cache.load(), Err(CacheError::Corrupt(_))));
    }

    #[test]
    fn whitespace_only_file_is_empty_slot() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("slot.json");
        std::fs::write(&path, "  \n ").unwrap();

        assert!(FileCache::new(&path).load().unwrap().is_none());
    }

    #[test]
    fn from_config_uses_slot_name() {
        let config = CacheConfig {
            dir: "/tmp/folio-test".into(),
            slot: "staging".into(),
        };
        let cache = FileCache::from_config(&config).unwrap();
        assert_eq!(cache.path(), Path::new("/tmp/folio-test/staging.json"));
    }

    #[test]
    fn memory_cache_roundtrip() {
        let cache = MemoryCache::new();
        assert!(cache.load().unwrap().is_none());

        let doc = ContentDocument::default();
        cache.store(&doc).unwrap();
        assert_eq!(cache.load().unwrap(), Some(doc));
    }
}
