use serde::{
    de::{self, MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::collections::BTreeMap;
use std::fmt;

use super::Side;


/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whole-number count from a JSON number the backend may have written as a float.
/// Negative and non-finite values count as zero.
fn count_from_f64(value: Option<f64>) -> u32 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v.round().min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

/// Read a match count that may arrive as `2`, `2.0` or `null`.
fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(count_from_f64(Option::<f64>::deserialize(deserializer)?))
}

/// Parse a round key as emitted by the backend (`"3"`, sometimes `"3.0"`).
pub fn parse_round_key(key: &str) -> Option<u32> {
    let key = key.trim();
    if let Ok(round) = key.parse::<u32>() {
        return Some(round);
    }
    let float = key.parse::<f64>().ok()?;
    if float.is_finite() && float.fract() == 0.0 && float >= 0.0 && float <= u32::MAX as f64 {
        Some(float as u32)
    } else {
        None
    }
}

/// Label -> value mapping that keeps the order the backend delivered it in.
///
/// Formation counts and play-style averages arrive pre-sorted by the analytics
/// service, so the order carries meaning and a hash or sorted map would lose it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyMap(Vec<(String, Option<f64>)>);

impl FrequencyMap {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(label, value)| (label.into(), Some(value)))
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> + '_ {
        self.0.iter().map(|(label, value)| (label.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for FrequencyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in &self.0 {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

struct OrderedEntries;

impl<'de> Visitor<'de> for OrderedEntries {
    type Value = Vec<(String, Option<f64>)>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of labels to numbers")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((label, value)) = access.next_entry::<String, Option<f64>>()? {
            entries.push((label, value));
        }
        Ok(entries)
    }
}

impl<'de> Deserialize<'de> for FrequencyMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OrderedEntries).map(FrequencyMap)
    }
}

/// A per-round series keyed by round number, always iterated in ascending round order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RoundSeries(BTreeMap<u32, Option<f64>>);

impl RoundSeries {
    pub fn from_pairs<I: IntoIterator<Item = (u32, f64)>>(pairs: I) -> Self {
        Self(pairs.into_iter().map(|(r, v)| (r, Some(v))).collect())
    }

    /// Value recorded for `round`; `None` when the round is missing or null.
    pub fn get(&self, round: u32) -> Option<f64> {
        self.0.get(&round).copied().flatten()
    }

    pub fn rounds(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, Option<f64>)> + '_ {
        self.0.iter().map(|(round, value)| (*round, *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for RoundSeries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = deserializer.deserialize_any(OrderedEntries)?;
        let mut series = BTreeMap::new();
        for (key, value) in entries {
            match parse_round_key(&key) {
                Some(round) => {
                    series.insert(round, value);
                }
                None => log::warn!("Dropping non-numeric round key {:?}", key),
            }
        }
        Ok(RoundSeries(series))
    }
}

/// Outcome code used by the backend's result columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutcomeCode {
    HomeWin,
    Draw,
    AwayWin,
}

impl OutcomeCode {
    fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "h" | "home_wins" | "home_win" => Some(OutcomeCode::HomeWin),
            "d" | "draws" | "draw" => Some(OutcomeCode::Draw),
            "a" | "away_wins" | "away_win" => Some(OutcomeCode::AwayWin),
            _ => None,
        }
    }
}

/// Win/draw/loss counts for one round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcomes {
    pub home_wins: u32,
    pub draws: u32,
    pub away_wins: u32,
}

impl RoundOutcomes {
    fn record(&mut self, code: OutcomeCode, count: Option<f64>) {
        // pandas fills missing outcomes with 0.0, so counts come through as floats
        let count = count_from_f64(count);
        match code {
            OutcomeCode::HomeWin => self.home_wins = count,
            OutcomeCode::Draw => self.draws = count,
            OutcomeCode::AwayWin => self.away_wins = count,
        }
    }

    pub fn total(&self) -> u32 {
        self.home_wins + self.draws + self.away_wins
    }
}

/// Accept both row-oriented (`{round: {"H": n}}`) and column-oriented
/// (`{"H": {round: n}}`) result distributions.
fn de_round_outcomes<'de, D>(deserializer: D) -> Result<BTreeMap<u32, RoundOutcomes>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, BTreeMap<String, Option<f64>>>> =
        Option::deserialize(deserializer)?;
    let raw = raw.unwrap_or_default();

    let column_oriented =
        !raw.is_empty() && raw.keys().all(|k| OutcomeCode::parse(k).is_some());

    let mut by_round: BTreeMap<u32, RoundOutcomes> = BTreeMap::new();
    for (outer, inner) in raw {
        if column_oriented {
            let Some(code) = OutcomeCode::parse(&outer) else {
                continue;
            };
            for (round_key, count) in inner {
                let Some(round) = parse_round_key(&round_key) else {
                    log::warn!("Dropping non-numeric round key {:?}", round_key);
                    continue;
                };
                by_round.entry(round).or_default().record(code, count);
            }
        } else {
            let Some(round) = parse_round_key(&outer) else {
                log::warn!("Dropping non-numeric round key {:?}", outer);
                continue;
            };
            let outcomes = by_round.entry(round).or_default();
            for (code, count) in inner {
                if let Some(code) = OutcomeCode::parse(&code) {
                    outcomes.record(code, count);
                }
            }
        }
    }
    Ok(by_round)
}

/// One side (home or away) of a team's season record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SideStats {
    #[serde(deserialize_with = "lenient_count")]
    pub played: u32,
    #[serde(deserialize_with = "lenient_count")]
    pub wins: u32,
    #[serde(deserialize_with = "lenient_count")]
    pub draws: u32,
    #[serde(deserialize_with = "lenient_count")]
    pub losses: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub goals_for: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub goals_against: f64,
    pub avg_possession: Option<f64>,
    pub shots_conversion: Option<f64>,
}

/// A team's home/away split. `played` may be zero for a team with no matches yet.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TeamSeasonStats {
    #[serde(deserialize_with = "null_as_default")]
    pub home: SideStats,
    #[serde(deserialize_with = "null_as_default")]
    pub away: SideStats,
}

impl TeamSeasonStats {
    pub fn side(&self, side: Side) -> &SideStats {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HomeAway {
    pub home: Option<f64>,
    pub away: Option<f64>,
}

/// Average possession of the side that won (or of the home side, for draws).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PossessionImpact {
    pub home_win: Option<f64>,
    pub away_win: Option<f64>,
    pub draw: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Effectiveness {
    #[serde(deserialize_with = "null_as_default")]
    pub shots_conversion: HomeAway,
    #[serde(deserialize_with = "null_as_default")]
    pub possession_impact: PossessionImpact,
}

/// Per-formation effectiveness columns; `result` is the win percentage and
/// arrives sorted by it, best first.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FormationEffectiveness {
    pub home_goals: FrequencyMap,
    pub away_goals: FrequencyMap,
    pub result: FrequencyMap,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FormationSide {
    pub most_common: FrequencyMap,
    #[serde(deserialize_with = "null_as_default")]
    pub most_effective: FormationEffectiveness,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Formations {
    #[serde(deserialize_with = "null_as_default")]
    pub home: FormationSide,
    #[serde(deserialize_with = "null_as_default")]
    pub away: FormationSide,
}

impl Formations {
    pub fn side(&self, side: Side) -> &FormationSide {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }
}

/// Per-style averages for one side, one map per column.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StyleColumns {
    pub home_goals: FrequencyMap,
    pub away_goals: FrequencyMap,
    pub result: FrequencyMap,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayStyles {
    #[serde(deserialize_with = "null_as_default")]
    pub home: StyleColumns,
    #[serde(deserialize_with = "null_as_default")]
    pub away: StyleColumns,
}

impl PlayStyles {
    /// Average goals scored per style by the given side: the home side's
    /// `home_goals` column or the away side's `away_goals` column.
    pub fn goals_for(&self, side: Side) -> &FrequencyMap {
        match side {
            Side::Home => &self.home.home_goals,
            Side::Away => &self.away.away_goals,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GoalsTrend {
    pub home_goals: RoundSeries,
    pub away_goals: RoundSeries,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PossessionTrend {
    pub home_possession: RoundSeries,
    pub away_possession: RoundSeries,
}

/// The three co-indexed per-round mappings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ByJornada {
    #[serde(deserialize_with = "null_as_default")]
    pub goals_trend: GoalsTrend,
    #[serde(deserialize_with = "null_as_default")]
    pub possession_trend: PossessionTrend,
    #[serde(deserialize_with = "de_round_outcomes")]
    pub results_distribution: BTreeMap<u32, RoundOutcomes>,
}

/// Full analytics payload as served by the backend's `/analysis/` endpoint.
///
/// Every field is optional on the wire: absence (or `null`) becomes an empty
/// mapping or zero rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyticsSnapshot {
    #[serde(deserialize_with = "lenient_count")]
    pub total_matches: u32,
    #[serde(deserialize_with = "lenient_count")]
    pub home_wins: u32,
    #[serde(deserialize_with = "lenient_count")]
    pub away_wins: u32,
    #[serde(deserialize_with = "lenient_count")]
    pub draws: u32,
    pub avg_home_goals: Option<f64>,
    pub avg_away_goals: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub effectiveness: Effectiveness,
    #[serde(deserialize_with = "null_as_default")]
    pub formations: Formations,
    #[serde(deserialize_with = "null_as_default")]
    pub play_styles: PlayStyles,
    #[serde(deserialize_with = "null_as_default")]
    pub by_jornada: ByJornada,
    #[serde(deserialize_with = "null_as_default")]
    pub team_stats: BTreeMap<String, TeamSeasonStats>,
}
