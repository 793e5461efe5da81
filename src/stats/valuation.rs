//! Roster valuation statistics.

use serde::Serialize;

use super::magnitude::{format_magnitude, parse_magnitude, try_parse_magnitude};
use crate::snapshot::RosterEntry;


/// A roster entry whose value parsed, with its magnitude.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuedTeam {
    pub name: String,
    pub raw: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationStats {
    pub highest: ValuedTeam,
    pub lowest: ValuedTeam,
    pub average: f64,
    /// `highest.value - lowest.value`
    pub spread: f64,
    pub total: f64,
    pub valued_count: usize,
    pub average_formatted: String,
    pub spread_formatted: String,
}

/// Min/max/mean/spread over the entries that carry a parseable value.
///
/// Entries with a missing or unparseable value stay in the roster but are
/// left out here. Returns `None` when no entry is valued, which callers must treat as
/// "no data" rather than a zero valuation. On equal extremes the first entry
/// in roster order wins: later ties never replace the incumbent.
pub fn compute_valuation_stats(roster: &[RosterEntry]) -> Option<ValuationStats> {
    let mut highest: Option<ValuedTeam> = None;
    let mut lowest: Option<ValuedTeam> = None;
    let mut total = 0.0;
    let mut valued_count = 0usize;

    for entry in roster {
        let Some(raw) = entry.raw_value() else {
            continue;
        };
        let value = match try_parse_magnitude(raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("{}; leaving {} out of valuation stats", e, entry.name);
                continue;
            }
        };
        let team = ValuedTeam {
            name: entry.name.clone(),
            raw: raw.to_string(),
            value,
        };

        if highest.as_ref().map_or(true, |h| value > h.value) {
            highest = Some(team.clone());
        }
        if lowest.as_ref().map_or(true, |l| value < l.value) {
            lowest = Some(team);
        }

        total += value;
        valued_count += 1;
    }

    let (highest, lowest) = (highest?, lowest?);
    let average = total / valued_count as f64;
    let spread = highest.value - lowest.value;

    Some(ValuationStats {
        average_formatted: format_magnitude(average),
        spread_formatted: format_magnitude(spread),
        highest,
        lowest,
        average,
        spread,
        total,
        valued_count,
    })
}

/// Roster ordered by parsed value, most valuable first. Entries without a
/// value count as zero; equal values keep roster order.
pub fn rank_by_value(roster: &[RosterEntry]) -> Vec<(&RosterEntry, f64)> {
    let mut ranked: Vec<(&RosterEntry, f64)> = roster
        .iter()
        .map(|entry| (entry, parse_magnitude(entry.raw_value())))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}
