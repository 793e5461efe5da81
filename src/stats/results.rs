//! Overall result distribution and the headline figures of a snapshot.

use serde::Serialize;

use super::numeric::{format_percentage, safe_fixed};
use crate::snapshot::AnalyticsSnapshot;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultCategory {
    HomeWins,
    AwayWins,
    Draws,
}

impl ResultCategory {
    pub const ALL: [ResultCategory; 3] = [
        ResultCategory::HomeWins,
        ResultCategory::AwayWins,
        ResultCategory::Draws,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResultCategory::HomeWins => "Home wins",
            ResultCategory::AwayWins => "Away wins",
            ResultCategory::Draws => "Draws",
        }
    }
}

/// Win/draw/loss totals for a whole snapshot. Absent counts are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultTotals {
    pub home_wins: u32,
    pub away_wins: u32,
    pub draws: u32,
}

impl From<&AnalyticsSnapshot> for ResultTotals {
    fn from(snapshot: &AnalyticsSnapshot) -> Self {
        Self {
            home_wins: snapshot.home_wins,
            away_wins: snapshot.away_wins,
            draws: snapshot.draws,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub category: ResultCategory,
    pub label: &'static str,
    pub value: u32,
}

/// Three pie slices, always home wins, away wins, draws in that order.
pub fn build_result_distribution(totals: ResultTotals) -> Vec<Slice> {
    ResultCategory::ALL
        .iter()
        .map(|&category| Slice {
            category,
            label: category.label(),
            value: match category {
                ResultCategory::HomeWins => totals.home_wins,
                ResultCategory::AwayWins => totals.away_wins,
                ResultCategory::Draws => totals.draws,
            },
        })
        .collect()
}

/// Headline figures, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyStats {
    pub total_matches: u32,
    pub avg_home_goals: String,
    pub avg_away_goals: String,
    pub home_shots_conversion: String,
    pub away_shots_conversion: String,
    /// Average possession of the winning side in home wins, away wins, and
    /// of the home side in draws.
    pub possession_home_win: String,
    pub possession_away_win: String,
    pub possession_draw: String,
}

pub fn summarize(snapshot: &AnalyticsSnapshot) -> KeyStats {
    let conversion = &snapshot.effectiveness.shots_conversion;
    let impact = &snapshot.effectiveness.possession_impact;
    KeyStats {
        total_matches: snapshot.total_matches,
        avg_home_goals: safe_fixed(snapshot.avg_home_goals, 2),
        avg_away_goals: safe_fixed(snapshot.avg_away_goals, 2),
        home_shots_conversion: format_percentage(conversion.home, 2),
        away_shots_conversion: format_percentage(conversion.away, 2),
        possession_home_win: format_percentage(impact.home_win, 1),
        possession_away_win: format_percentage(impact.away_win, 1),
        possession_draw: format_percentage(impact.draw, 1),
    }
}
