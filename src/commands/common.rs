//! Common utilities and helper functions shared across commands.

use anyhow::{Context, Result};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    api::{build_client, load_or_fetch_snapshot, load_snapshot_file, resolve_api_url, CacheStatus},
    cli::SourceArgs,
    core::snapshot_cache_path,
    dashboard::{Dashboard, DashboardCache, DashboardOptions, TeamView},
    snapshot::AnalyticsSnapshot,
};

/// Context containing the snapshot every snapshot-backed command works on
pub struct CommandContext {
    pub snapshot: AnalyticsSnapshot,
    pub cache: DashboardCache,
}

impl CommandContext {
    /// Load the snapshot from `--file`, or from the service through the disk cache
    pub async fn new(source: &SourceArgs, verbose: bool) -> Result<Self> {
        let snapshot = match &source.file {
            Some(path) => {
                if verbose {
                    println!("Reading snapshot from {}...", path.display());
                }
                load_snapshot_file(path)
                    .with_context(|| format!("reading snapshot file {}", path.display()))?
            }
            None => fetch_with_message(source, verbose).await?,
        };

        Ok(Self {
            snapshot,
            cache: DashboardCache::default(),
        })
    }

    pub fn from_snapshot(snapshot: AnalyticsSnapshot) -> Self {
        Self {
            snapshot,
            cache: DashboardCache::default(),
        }
    }

    pub fn dashboard(&self, options: DashboardOptions) -> Result<Arc<Dashboard>> {
        Ok(self.cache.dashboard(&self.snapshot, options)?)
    }

    pub fn team_view(&self, team_a: &str, team_b: &str) -> Result<Arc<TeamView>> {
        Ok(self.cache.team_view(&self.snapshot, team_a, team_b)?)
    }
}

async fn fetch_with_message(source: &SourceArgs, verbose: bool) -> Result<AnalyticsSnapshot> {
    let api_url = resolve_api_url(source.api_url.clone());

    if verbose {
        if source.refresh {
            println!("Fetching fresh snapshot from {}...", api_url);
        } else {
            println!("Loading snapshot (cached if available)...");
        }
    }

    let client = build_client()?;
    // tarpaulin::skip - HTTP/file I/O call, tested via integration tests
    let (snapshot, status) = load_or_fetch_snapshot(&client, &api_url, source.refresh)
        .await
        .with_context(|| format!("loading snapshot from {}", api_url))?;

    if verbose {
        match status {
            CacheStatus::Hit => println!("✓ Snapshot loaded (from cache)"),
            CacheStatus::Miss => println!("✓ Snapshot fetched (cache miss)"),
            CacheStatus::Refreshed => println!("✓ Snapshot fetched (refreshed)"),
        }
        println!(
            "Snapshot cached at: {}",
            snapshot_cache_path(&api_url).display()
        );
    }

    Ok(snapshot)
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
