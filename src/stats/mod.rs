//! Pure aggregation functions over an analytics snapshot.
//!
//! Nothing here fails or mutates its input: missing data becomes `0`, `"N/A"`,
//! `None` or an empty list, depending on what the consumer needs to tell apart.
//!
//! - `numeric`: display-safe formatting
//! - `magnitude`: "30,3M" style value parsing and formatting
//! - `valuation`: roster value statistics
//! - `results`: overall result distribution and headline figures
//! - `tactics`: top-N formation and play-style lists
//! - `comparison`: two-team side-by-side rows
//! - `profile`: single-team radar profile
//! - `trends`: per-round trend merge

pub mod comparison;
pub mod magnitude;
pub mod numeric;
pub mod profile;
pub mod results;
pub mod tactics;
pub mod trends;
pub mod valuation;

pub use comparison::{compare_teams, find_team, ComparisonCategory, ComparisonRow};
pub use magnitude::{format_magnitude, parse_magnitude, try_parse_magnitude};
pub use numeric::{format_percentage, safe_fixed, to_fixed, NOT_AVAILABLE};
pub use profile::{team_radar_profile, team_radar_profile_for, ProfileAxis, RadarPoint};
pub use results::{build_result_distribution, summarize, KeyStats, ResultTotals, Slice};
pub use tactics::{
    formation_frequencies, most_effective_formations, play_style_goals, top_frequencies,
    top_frequencies_by, LabeledValue, TopOrder, DEFAULT_TOP_LIMIT,
};
pub use trends::{merge_journey_trends, TrendPoint};
pub use valuation::{compute_valuation_stats, rank_by_value, ValuationStats, ValuedTeam};
