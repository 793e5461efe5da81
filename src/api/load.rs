use reqwest::Client;
use serde_json::Value;
use std::path::Path;

use super::http::{get_analysis, DEFAULT_API_URL};
use crate::core::{snapshot_cache_path, try_read_to_string, write_string};
use crate::snapshot::AnalyticsSnapshot;
use crate::{Result, API_URL_ENV_VAR};

/// Where a snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
    Refreshed,
}

/// Explicit URL, else the env var, else the local default. Blank values are skipped.
pub fn resolve_api_url(api_url: Option<String>) -> String {
    api_url
        .filter(|s| !s.trim().is_empty())
        .or_else(|| {
            std::env::var(API_URL_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Read a snapshot saved from the `/analysis/` endpoint.
pub fn load_snapshot_file(path: &Path) -> Result<AnalyticsSnapshot> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Cached snapshot at `path`, if one exists and still parses.
fn read_cached_snapshot(path: &Path) -> Option<AnalyticsSnapshot> {
    let contents = try_read_to_string(path)?;
    match serde_json::from_str(&contents) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            log::warn!("ignoring unreadable snapshot cache {}: {}", path.display(), e);
            None
        }
    }
}

/// Load the snapshot from the disk cache, or fetch it when missing or `refresh` is set.
pub async fn load_or_fetch_snapshot(
    client: &Client,
    api_url: &str,
    refresh: bool,
) -> Result<(AnalyticsSnapshot, CacheStatus)> {
    let path = snapshot_cache_path(api_url);
    load_or_fetch_snapshot_at(client, api_url, &path, refresh).await
}

/// [`load_or_fetch_snapshot`] with an explicit cache file.
pub async fn load_or_fetch_snapshot_at(
    client: &Client,
    api_url: &str,
    cache_path: &Path,
    refresh: bool,
) -> Result<(AnalyticsSnapshot, CacheStatus)> {
    if !refresh {
        if let Some(snapshot) = read_cached_snapshot(cache_path) {
            log::debug!("snapshot cache hit: {}", cache_path.display());
            return Ok((snapshot, CacheStatus::Hit));
        }
    }

    log::debug!("fetching snapshot from {}", api_url);
    let raw: Value = get_analysis(client, api_url).await?;
    let snapshot: AnalyticsSnapshot = serde_json::from_value(raw.clone())?;

    // store the raw payload so the cache mirrors what the service sent
    if let Ok(json_str) = serde_json::to_string_pretty(&raw) {
        if let Err(e) = write_string(cache_path, &json_str) {
            log::warn!("could not write snapshot cache {}: {}", cache_path.display(), e);
        }
    }

    let status = if refresh {
        CacheStatus::Refreshed
    } else {
        CacheStatus::Miss
    };
    Ok((snapshot, status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StatsError;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_api_url() {
        std::env::remove_var(API_URL_ENV_VAR);
        assert_eq!(resolve_api_url(None), DEFAULT_API_URL);
        assert_eq!(resolve_api_url(Some("  ".to_string())), DEFAULT_API_URL);

        std::env::set_var(API_URL_ENV_VAR, "http://stats.internal:9000");
        assert_eq!(resolve_api_url(None), "http://stats.internal:9000");
        assert_eq!(
            resolve_api_url(Some("http://override:1".to_string())),
            "http://override:1"
        );

        std::env::remove_var(API_URL_ENV_VAR);
    }

    #[test]
    fn test_load_snapshot_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("analysis.json");
        std::fs::write(
            &path,
            json!({ "total_matches": 10, "draws": 4 }).to_string(),
        )
        .unwrap();

        let snapshot = load_snapshot_file(&path).unwrap();
        assert_eq!(snapshot.total_matches, 10);
        assert_eq!(snapshot.draws, 4);
    }

    #[test]
    fn test_load_snapshot_file_errors() {
        let dir = tempdir().unwrap();

        match load_snapshot_file(&dir.path().join("missing.json")) {
            Err(StatsError::Io(_)) => (),
            other => panic!("Expected Io error, got {:?}", other),
        }

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        match load_snapshot_file(&bad) {
            Err(StatsError::Json(_)) => (),
            other => panic!("Expected Json error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_or_fetch_uses_cache_without_network() {
        let dir = tempdir().unwrap();
        let cache_path = dir.path().join("analysis_test.json");
        write_string(&cache_path, &json!({ "total_matches": 7 }).to_string()).unwrap();

        // nothing listens on port 9, so a fetch attempt would fail
        let client = Client::new();
        let (snapshot, status) =
            load_or_fetch_snapshot_at(&client, "http://127.0.0.1:9", &cache_path, false)
                .await
                .unwrap();

        assert_eq!(status, CacheStatus::Hit);
        assert_eq!(snapshot.total_matches, 7);
    }

    #[tokio::test]
    async fn test_load_or_fetch_refresh_skips_cache() {
        let dir = tempdir().unwrap();
        let cache_path = dir.path().join("analysis_test.json");
        write_string(&cache_path, &json!({ "total_matches": 7 }).to_string()).unwrap();

        let client = Client::builder().no_proxy().build().unwrap();
        let result =
            load_or_fetch_snapshot_at(&client, "http://127.0.0.1:9", &cache_path, true).await;

        assert!(matches!(result, Err(StatsError::Http(_))));
    }

    #[test]
    fn test_read_cached_snapshot_ignores_corrupt_file() {
        let dir = tempdir().unwrap();
        let cache_path = dir.path().join("analysis_test.json");
        write_string(&cache_path, "[1, 2").unwrap();

        assert!(read_cached_snapshot(&cache_path).is_none());
        assert!(read_cached_snapshot(&dir.path().join("missing.json")).is_none());
    }
}
