//! Caching for analytics snapshots and the figures derived from them
//!
//! Two independent pieces:
//! - an in-memory LRU memo cache keyed by snapshot content digest, so a
//!   snapshot that has not changed is never aggregated twice
//! - plain files under the user cache dir holding the last fetched raw snapshot

use lru::LruCache;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::{
    fmt,
    fs,
    hash::Hash,
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use crate::Result;

/// Directory name under the platform cache dir.
pub const CACHE_DIR_NAME: &str = "league-stats";

/// Base directory for cache files: `~/.cache/league-stats` on Linux.
pub fn cache_base_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join(CACHE_DIR_NAME)
}

/// Path: ~/.cache/league-stats/analysis_{host}.json
///
/// Every character outside `[A-Za-z0-9.-]` in the API URL's host and port is
/// replaced so different backends never share a cache file.
pub fn snapshot_cache_path(api_url: &str) -> PathBuf {
    let without_scheme = api_url.split("://").last().unwrap_or(api_url);
    let host = without_scheme.split('/').next().unwrap_or_default();
    let slug: String = host
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let slug = if slug.is_empty() { "default".to_string() } else { slug };
    cache_base_dir().join(format!("analysis_{}.json", slug))
}

/// Read a file to a String; `None` when it is missing or unreadable.
pub fn try_read_to_string(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}

/// Write a string to file, creating parent directories.
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}

/// SHA-256 of a value's JSON serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnapshotDigest([u8; 32]);

impl SnapshotDigest {
    pub fn of<T: Serialize>(value: &T) -> Result<Self> {
        let bytes = serde_json::to_vec(value)?;
        Ok(Self(Sha256::digest(&bytes).into()))
    }
}

impl fmt::Display for SnapshotDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Thread-safe LRU memo cache.
pub struct MemoCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    entries: Mutex<LruCache<K, V>>,
    capacity: usize,
}

impl<K, V> MemoCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a cache holding at most `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            capacity: capacity.get(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<K, V>> {
        // a panic mid-insert cannot leave the LRU half-updated, so a poisoned lock is still usable
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.lock().get(key).cloned()
    }

    pub fn put(&self, key: K, value: V) {
        self.lock().put(key, value);
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    ///
    /// `compute` runs without the lock held; two racing misses both compute
    /// and the later one wins, which is harmless for pure computations.
    pub fn get_or_insert_with<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(&key) {
            log::debug!("memo cache hit");
            return value;
        }
        log::debug!("memo cache miss");
        let value = compute();
        self.put(key, value.clone());
        value
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// (entries in use, capacity)
    pub fn stats(&self) -> (usize, usize) {
        (self.lock().len(), self.capacity)
    }
}
