//! Merge of the per-round goals, possession and result series into one trend.

use serde::Serialize;

use crate::snapshot::{ByJornada, RoundOutcomes};

#[cfg(test)]
mod tests;

/// One round's merged record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub round: u32,
    pub label: String,
    pub home_goals: Option<f64>,
    pub away_goals: f64,
    pub home_possession: f64,
    pub away_possession: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcomes: Option<RoundOutcomes>,
}

/// Chart label for a round, e.g. `J7`.
pub fn round_label(round: u32) -> String {
    format!("J{}", round)
}

/// One point per round present in the home-goals series, ascending by round.
///
/// Rounds missing from the home-goals series are skipped even when other
/// series have them. Away goals and possession default to 0; outcome counts
/// are attached only when the round has an entry.
pub fn merge_journey_trends(by_jornada: &ByJornada) -> Vec<TrendPoint> {
    let goals = &by_jornada.goals_trend;
    let possession = &by_jornada.possession_trend;

    // RoundSeries iterates in ascending round order
    goals
        .home_goals
        .iter()
        .map(|(round, home_goals)| TrendPoint {
            round,
            label: round_label(round),
            home_goals,
            away_goals: goals.away_goals.get(round).unwrap_or(0.0),
            home_possession: possession.home_possession.get(round).unwrap_or(0.0),
            away_possession: possession.away_possession.get(round).unwrap_or(0.0),
            outcomes: by_jornada.results_distribution.get(&round).copied(),
        })
        .collect()
}
