//! Side-by-side metrics for two teams.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::snapshot::{Side, TeamSeasonStats};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonCategory {
    HomeWins,
    AwayWins,
    HomeGoalsScored,
    AwayGoalsScored,
    HomeAvgPossession,
    AwayAvgPossession,
}

impl ComparisonCategory {
    pub const ALL: [ComparisonCategory; 6] = [
        ComparisonCategory::HomeWins,
        ComparisonCategory::AwayWins,
        ComparisonCategory::HomeGoalsScored,
        ComparisonCategory::AwayGoalsScored,
        ComparisonCategory::HomeAvgPossession,
        ComparisonCategory::AwayAvgPossession,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ComparisonCategory::HomeWins => "Home wins",
            ComparisonCategory::AwayWins => "Away wins",
            ComparisonCategory::HomeGoalsScored => "Goals scored (home)",
            ComparisonCategory::AwayGoalsScored => "Goals scored (away)",
            ComparisonCategory::HomeAvgPossession => "Avg possession (home)",
            ComparisonCategory::AwayAvgPossession => "Avg possession (away)",
        }
    }

    fn side(&self) -> Side {
        match self {
            ComparisonCategory::HomeWins
            | ComparisonCategory::HomeGoalsScored
            | ComparisonCategory::HomeAvgPossession => Side::Home,
            _ => Side::Away,
        }
    }

    /// Pull this category's figure out of a team record.
    pub fn extract(&self, stats: &TeamSeasonStats) -> Option<f64> {
        let side = stats.side(self.side());
        match self {
            ComparisonCategory::HomeWins | ComparisonCategory::AwayWins => Some(side.wins as f64),
            ComparisonCategory::HomeGoalsScored | ComparisonCategory::AwayGoalsScored => {
                Some(side.goals_for)
            }
            ComparisonCategory::HomeAvgPossession | ComparisonCategory::AwayAvgPossession => {
                side.avg_possession
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub category: ComparisonCategory,
    pub label: &'static str,
    pub team_a: Option<f64>,
    pub team_b: Option<f64>,
}

/// Look a team up by name; blank names never match.
pub fn find_team<'a>(
    team_stats: &'a BTreeMap<String, TeamSeasonStats>,
    name: &str,
) -> Option<&'a TeamSeasonStats> {
    if name.trim().is_empty() {
        return None;
    }
    team_stats.get(name)
}

/// Six fixed rows comparing `team_a` with `team_b`, or nothing when either
/// name is blank or unknown.
pub fn compare_teams(
    team_stats: &BTreeMap<String, TeamSeasonStats>,
    team_a: &str,
    team_b: &str,
) -> Vec<ComparisonRow> {
    let (Some(a), Some(b)) = (find_team(team_stats, team_a), find_team(team_stats, team_b)) else {
        return Vec::new();
    };

    ComparisonCategory::ALL
        .iter()
        .map(|category| ComparisonRow {
            category: *category,
            label: category.label(),
            team_a: category.extract(a),
            team_b: category.extract(b),
        })
        .collect()
}
