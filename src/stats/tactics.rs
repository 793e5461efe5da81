//! Bounded top-N lists over formation and play-style frequency maps.

use serde::Serialize;
use std::cmp::Ordering;

use super::numeric::round_display;
use crate::snapshot::{AnalyticsSnapshot, FrequencyMap, Side};


/// Number of bars shown per tactics chart.
pub const DEFAULT_TOP_LIMIT: usize = 5;

/// How entries are ordered before truncation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TopOrder {
    /// Keep the order the analytics service delivered. Only yields the "most
    /// common" entries when the service sorted the map by count, which it does
    /// for its `most_common` and `most_effective` columns.
    #[default]
    AsDelivered,
    /// Stable sort by value, largest first; missing values go last.
    ByValueDesc,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: Option<f64>,
}

/// First `limit` entries of `map` in delivered order.
pub fn top_frequencies(map: &FrequencyMap, limit: usize) -> Vec<LabeledValue> {
    top_frequencies_by(map, limit, TopOrder::AsDelivered)
}

pub fn top_frequencies_by(map: &FrequencyMap, limit: usize, order: TopOrder) -> Vec<LabeledValue> {
    let mut entries: Vec<LabeledValue> = map
        .iter()
        .map(|(label, value)| LabeledValue {
            label: label.to_string(),
            value,
        })
        .collect();

    if order == TopOrder::ByValueDesc {
        entries.sort_by(|a, b| descending_missing_last(a.value, b.value));
    }

    entries.truncate(limit);
    entries
}

fn descending_missing_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Most used formations for one side.
pub fn formation_frequencies(
    snapshot: &AnalyticsSnapshot,
    side: Side,
    limit: usize,
    order: TopOrder,
) -> Vec<LabeledValue> {
    top_frequencies_by(&snapshot.formations.side(side).most_common, limit, order)
}

/// Formations ranked by win percentage for one side, as ranked by the service.
pub fn most_effective_formations(
    snapshot: &AnalyticsSnapshot,
    side: Side,
    limit: usize,
) -> Vec<LabeledValue> {
    top_frequencies(&snapshot.formations.side(side).most_effective.result, limit)
}

/// Average goals scored per play style for one side, rounded to two decimals.
/// Averages that are not numbers come back as `None`.
pub fn play_style_goals(
    snapshot: &AnalyticsSnapshot,
    side: Side,
    limit: usize,
    order: TopOrder,
) -> Vec<LabeledValue> {
    top_frequencies_by(snapshot.play_styles.goals_for(side), limit, order)
        .into_iter()
        .map(|entry| LabeledValue {
            value: round_display(entry.value, 2),
            ..entry
        })
        .collect()
}
