//! On-disk page cache keyed by URL.
//!
//! One file per URL under the configured directory. Entries are never
//! expired or deleted; `clear_cache` only hides them from reads so the next
//! fetch overwrites them.

mod key;

pub use key::{file_name_for, hash_url, sanitize_url};

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::config::{BrowseConfig, CacheKeyScheme};

#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
    scheme: CacheKeyScheme,
    clear: bool,
}

impl CacheStore {
    pub fn new(dir: impl Into<PathBuf>, scheme: CacheKeyScheme, clear: bool) -> Self {
        Self {
            dir: dir.into(),
            scheme,
            clear,
        }
    }

    pub fn from_config(cfg: &BrowseConfig) -> Self {
        Self::new(cfg.cache_dir.clone(), cfg.cache_key, cfg.clear_cache)
    }

    /// Cache file path for `url`. Pure function of the URL and the store settings.
    pub fn path_for(&self, url: &str) -> PathBuf {
        self.dir.join(file_name_for(url, self.scheme))
    }

    /// True iff reads are enabled and a cache file exists for `url`.
    pub fn exists(&self, url: &str) -> bool {
        !self.clear && self.path_for(url).is_file()
    }

    pub fn read(&self, url: &str) -> io::Result<Vec<u8>> {
        fs::read(self.path_for(url))
    }

    /// Writes `bytes` for `url`, replacing any previous entry.
    pub fn write(&self, url: &str, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(url), bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://msdn.microsoft.com/library";

    #[test]
    fn path_for_is_stable_and_under_dir() {
        let store = CacheStore::new("/tmp/cache", CacheKeyScheme::Sanitized, false);
        let a = store.path_for(URL);
        let b = store.path_for(URL);
        assert_eq!(a, b);
        assert_eq!(
            a,
            PathBuf::from("/tmp/cache/https___msdn.microsoft.com_library")
        );
    }

    #[test]
    fn write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path(), CacheKeyScheme::Sanitized, false);
        assert!(!store.exists(URL));
        store.write(URL, b"<html>cached</html>").unwrap();
        assert!(store.exists(URL));
        assert_eq!(store.read(URL).unwrap(), b"<html>cached</html>");
    }

    #[test]
    fn write_overwrites_and_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path().join("sub"), CacheKeyScheme::Sha256, false);
        store.write(URL, b"first").unwrap();
        store.write(URL, b"second").unwrap();
        assert_eq!(store.read(URL).unwrap(), b"second");
    }

    #[test]
    fn clear_hides_existing_entries_without_deleting() {
        let dir = tempfile::tempdir().unwrap();
        CacheStore::new(dir.path(), CacheKeyScheme::Sanitized, false)
            .write(URL, b"old")
            .unwrap();
        let cleared = CacheStore::new(dir.path(), CacheKeyScheme::Sanitized, true);
        assert!(!cleared.exists(URL));
        assert!(cleared.path_for(URL).exists());
    }

    #[test]
    fn write_into_unwritable_location_errors() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"x").unwrap();
        let store = CacheStore::new(&blocker, CacheKeyScheme::Sanitized, false);
        assert!(store.write(URL, b"page").is_err());
    }
}
