//! Seven-axis performance profile of a single team, scaled for a 0-100 radar.

use serde::Serialize;
use std::collections::BTreeMap;

use super::comparison::find_team;
use super::numeric::finite_or_zero;
use crate::snapshot::{SideStats, TeamSeasonStats};


/// Win rates are shown as percentages.
pub const WIN_RATE_SCALE: f64 = 100.0;
/// Goals per match rarely exceed ~5; x10 lands them near the 0-100 range.
pub const GOALS_PER_MATCH_SCALE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileAxis {
    HomeWinRate,
    AwayWinRate,
    HomeGoalsPerMatch,
    AwayGoalsPerMatch,
    HomePossession,
    AwayPossession,
    ShotsConversion,
}

impl ProfileAxis {
    pub const ALL: [ProfileAxis; 7] = [
        ProfileAxis::HomeWinRate,
        ProfileAxis::AwayWinRate,
        ProfileAxis::HomeGoalsPerMatch,
        ProfileAxis::AwayGoalsPerMatch,
        ProfileAxis::HomePossession,
        ProfileAxis::AwayPossession,
        ProfileAxis::ShotsConversion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileAxis::HomeWinRate => "Home wins",
            ProfileAxis::AwayWinRate => "Away wins",
            ProfileAxis::HomeGoalsPerMatch => "Home goals",
            ProfileAxis::AwayGoalsPerMatch => "Away goals",
            ProfileAxis::HomePossession => "Home possession",
            ProfileAxis::AwayPossession => "Away possession",
            ProfileAxis::ShotsConversion => "Shots conversion",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPoint {
    pub axis: ProfileAxis,
    pub label: &'static str,
    pub value: f64,
}

/// Matches used as a rate denominator. A side with no matches is treated as
/// having played one, so its rates come out as zero rather than NaN.
fn rate_denominator(side: &SideStats) -> f64 {
    if side.played == 0 {
        1.0
    } else {
        side.played as f64
    }
}

fn win_rate(side: &SideStats) -> f64 {
    side.wins as f64 / rate_denominator(side) * WIN_RATE_SCALE
}

fn goals_per_match(side: &SideStats) -> f64 {
    side.goals_for / rate_denominator(side) * GOALS_PER_MATCH_SCALE
}

/// Radar values for one team; every value is finite.
pub fn team_radar_profile(stats: &TeamSeasonStats) -> Vec<RadarPoint> {
    let (home, away) = (&stats.home, &stats.away);

    ProfileAxis::ALL
        .iter()
        .map(|&axis| {
            let value = match axis {
                ProfileAxis::HomeWinRate => win_rate(home),
                ProfileAxis::AwayWinRate => win_rate(away),
                ProfileAxis::HomeGoalsPerMatch => goals_per_match(home),
                ProfileAxis::AwayGoalsPerMatch => goals_per_match(away),
                ProfileAxis::HomePossession => home.avg_possession.unwrap_or(0.0),
                ProfileAxis::AwayPossession => away.avg_possession.unwrap_or(0.0),
                ProfileAxis::ShotsConversion => {
                    (home.shots_conversion.unwrap_or(0.0) + away.shots_conversion.unwrap_or(0.0))
                        / 2.0
                }
            };
            RadarPoint {
                axis,
                label: axis.label(),
                value: finite_or_zero(value),
            }
        })
        .collect()
}

/// [`team_radar_profile`] for a named team; blank or unknown names give an empty profile.
pub fn team_radar_profile_for(
    team_stats: &BTreeMap<String, TeamSeasonStats>,
    name: &str,
) -> Vec<RadarPoint> {
    find_team(team_stats, name)
        .map(team_radar_profile)
        .unwrap_or_default()
}
