//! Football League Analytics Library
//!
//! Turns the season analytics snapshot served by a league statistics service
//! into the figures a dashboard shows: result distribution, headline averages,
//! top formations and play styles, per-round trends, two-team comparisons,
//! single-team radar profiles and roster valuation statistics.
//!
//! ## Features
//!
//! - **Lenient snapshot model**: every field is optional on the wire; missing
//!   data becomes zeros, `"N/A"` or empty lists instead of errors
//! - **Pure aggregators**: the `stats` module never fails and never mutates input
//! - **Memoized dashboards**: derived views are cached by snapshot content digest
//! - **Disk cache**: the last fetched snapshot is kept under the user cache dir
//!
//! ## Quick Start
//!
//! ```rust
//! use league_stats::{dashboard::{Dashboard, DashboardOptions}, AnalyticsSnapshot};
//!
//! let snapshot: AnalyticsSnapshot = serde_json::from_str(
//!     r#"{ "total_matches": 2, "home_wins": 1, "draws": 1, "avg_home_goals": 1.5 }"#,
//! ).unwrap();
//!
//! let dashboard = Dashboard::build(&snapshot, DashboardOptions::default());
//! assert_eq!(dashboard.key_stats.avg_home_goals, "1.50");
//! assert_eq!(dashboard.key_stats.avg_away_goals, "N/A");
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a service other than `http://localhost:8000`:
//! ```bash
//! export LEAGUE_STATS_API_URL=http://stats.example.com
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod dashboard;
pub mod error;
pub mod snapshot;
pub mod stats;

// Re-export commonly used types
pub use dashboard::{Dashboard, DashboardCache, DashboardOptions};
pub use error::{Result, StatsError};
pub use snapshot::{AnalyticsSnapshot, LeagueRoster, RosterEntry, Side, TeamSeasonStats};

pub const API_URL_ENV_VAR: &str = "LEAGUE_STATS_API_URL";
