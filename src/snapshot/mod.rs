//! Typed input model: the analytics snapshot and template league rosters.

pub mod roster;
pub mod types;

pub use roster::{LeagueRoster, RosterEntry};
pub use types::{
    AnalyticsSnapshot, ByJornada, Effectiveness, FormationEffectiveness, FormationSide,
    Formations, FrequencyMap, GoalsTrend, HomeAway, PlayStyles, PossessionImpact,
    PossessionTrend, RoundOutcomes, RoundSeries, SideStats, StyleColumns, TeamSeasonStats,
};

use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which side of a fixture a figure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Home, Side::Away];
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

impl FromStr for Side {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" | "h" | "local" => Ok(Side::Home),
            "away" | "a" | "visitante" => Ok(Side::Away),
            _ => Err(StatsError::InvalidSide {
                side: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_from_str() {
        assert_eq!("home".parse::<Side>().unwrap(), Side::Home);
        assert_eq!("AWAY".parse::<Side>().unwrap(), Side::Away);
        assert_eq!(" h ".parse::<Side>().unwrap(), Side::Home);
        assert_eq!("visitante".parse::<Side>().unwrap(), Side::Away);
    }

    #[test]
    fn test_side_from_str_invalid() {
        match "neutral".parse::<Side>() {
            Err(StatsError::InvalidSide { side }) => assert_eq!(side, "neutral"),
            other => panic!("Expected InvalidSide, got {:?}", other),
        }
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Home.to_string(), "home");
        assert_eq!(Side::Away.to_string(), "away");
    }
}
