//! Core utilities shared by the fetch layer and the dashboard
//!
//! - `cache`: snapshot digest, LRU memo cache, and cache file helpers

pub mod cache;

pub use cache::{
    snapshot_cache_path, try_read_to_string, write_string, MemoCache, SnapshotDigest,
};
