//! Dashboard orchestration: every derived shape for one snapshot, memoized by content.

use serde::Serialize;
use std::sync::Arc;

use crate::core::{MemoCache, SnapshotDigest};
use crate::snapshot::{AnalyticsSnapshot, Side};
use crate::stats::{
    build_result_distribution, compare_teams, formation_frequencies, merge_journey_trends,
    most_effective_formations, play_style_goals, summarize, team_radar_profile_for, ComparisonRow,
    KeyStats, LabeledValue, RadarPoint, ResultTotals, Slice, TopOrder, TrendPoint,
    DEFAULT_TOP_LIMIT,
};
use crate::Result;

/// Knobs for the tactics lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DashboardOptions {
    pub top_limit: usize,
    pub top_order: TopOrder,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            top_limit: DEFAULT_TOP_LIMIT,
            top_order: TopOrder::AsDelivered,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerSide<T> {
    pub home: T,
    pub away: T,
}

impl<T> PerSide<T> {
    pub fn side(&self, side: Side) -> &T {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    fn build(mut f: impl FnMut(Side) -> T) -> Self {
        Self {
            home: f(Side::Home),
            away: f(Side::Away),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSelection {
    pub team_a: String,
    pub team_b: String,
}

/// Team names in alphabetical order.
pub fn team_names(snapshot: &AnalyticsSnapshot) -> Vec<String> {
    snapshot.team_stats.keys().cloned().collect()
}

/// Initial comparison pair: the first two teams, the only team against
/// itself, or nothing for an empty snapshot.
pub fn default_selection(snapshot: &AnalyticsSnapshot) -> Option<TeamSelection> {
    let mut names = snapshot.team_stats.keys();
    let first = names.next()?;
    let second = names.next().unwrap_or(first);
    Some(TeamSelection {
        team_a: first.clone(),
        team_b: second.clone(),
    })
}

/// Everything the summary, tactics and trends views show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub key_stats: KeyStats,
    pub result_distribution: Vec<Slice>,
    pub formations: PerSide<Vec<LabeledValue>>,
    pub effective_formations: PerSide<Vec<LabeledValue>>,
    pub play_styles: PerSide<Vec<LabeledValue>>,
    pub trends: Vec<TrendPoint>,
    pub teams: Vec<String>,
    pub default_selection: Option<TeamSelection>,
}

impl Dashboard {
    pub fn build(snapshot: &AnalyticsSnapshot, options: DashboardOptions) -> Self {
        let DashboardOptions {
            top_limit,
            top_order,
        } = options;

        Self {
            key_stats: summarize(snapshot),
            result_distribution: build_result_distribution(ResultTotals::from(snapshot)),
            formations: PerSide::build(|side| {
                formation_frequencies(snapshot, side, top_limit, top_order)
            }),
            effective_formations: PerSide::build(|side| {
                most_effective_formations(snapshot, side, top_limit)
            }),
            play_styles: PerSide::build(|side| {
                play_style_goals(snapshot, side, top_limit, top_order)
            }),
            trends: merge_journey_trends(&snapshot.by_jornada),
            teams: team_names(snapshot),
            default_selection: default_selection(snapshot),
        }
    }
}

/// The team comparison view for a selected pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamView {
    pub team_a: String,
    pub team_b: String,
    pub comparison: Vec<ComparisonRow>,
    pub profile_a: Vec<RadarPoint>,
    pub profile_b: Vec<RadarPoint>,
}

impl TeamView {
    pub fn build(snapshot: &AnalyticsSnapshot, team_a: &str, team_b: &str) -> Self {
        Self {
            team_a: team_a.to_string(),
            team_b: team_b.to_string(),
            comparison: compare_teams(&snapshot.team_stats, team_a, team_b),
            profile_a: team_radar_profile_for(&snapshot.team_stats, team_a),
            profile_b: team_radar_profile_for(&snapshot.team_stats, team_b),
        }
    }
}

type DashboardKey = (SnapshotDigest, DashboardOptions);
type TeamViewKey = (SnapshotDigest, String, String);

/// Memoizes dashboards and team views by snapshot content, so re-rendering an
/// unchanged snapshot never re-aggregates it.
pub struct DashboardCache {
    dashboards: MemoCache<DashboardKey, Arc<Dashboard>>,
    team_views: MemoCache<TeamViewKey, Arc<TeamView>>,
}

impl DashboardCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            dashboards: MemoCache::new(capacity),
            team_views: MemoCache::new(capacity),
        }
    }

    pub fn dashboard(
        &self,
        snapshot: &AnalyticsSnapshot,
        options: DashboardOptions,
    ) -> Result<Arc<Dashboard>> {
        let digest = SnapshotDigest::of(snapshot)?;
        Ok(self.dashboards.get_or_insert_with((digest, options), || {
            log::debug!("building dashboard for snapshot {}", digest);
            Arc::new(Dashboard::build(snapshot, options))
        }))
    }

    pub fn team_view(
        &self,
        snapshot: &AnalyticsSnapshot,
        team_a: &str,
        team_b: &str,
    ) -> Result<Arc<TeamView>> {
        let digest = SnapshotDigest::of(snapshot)?;
        let key = (digest, team_a.to_string(), team_b.to_string());
        Ok(self
            .team_views
            .get_or_insert_with(key, || Arc::new(TeamView::build(snapshot, team_a, team_b))))
    }

    /// (dashboards cached, team views cached)
    pub fn stats(&self) -> (usize, usize) {
        (self.dashboards.stats().0, self.team_views.stats().0)
    }
}

impl Default for DashboardCache {
    fn default() -> Self {
        Self::new(16)
    }
}
