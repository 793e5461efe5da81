use super::*;
use serde_json::json;

#[test]
fn test_result_distribution_order_and_values() {
    let slices = build_result_distribution(ResultTotals {
        home_wins: 12,
        away_wins: 7,
        draws: 5,
    });

    assert_eq!(slices.len(), 3);
    assert_eq!(slices[0].category, ResultCategory::HomeWins);
    assert_eq!(slices[0].value, 12);
    assert_eq!(slices[1].category, ResultCategory::AwayWins);
    assert_eq!(slices[1].value, 7);
    assert_eq!(slices[2].category, ResultCategory::Draws);
    assert_eq!(slices[2].value, 5);
    assert_eq!(slices[2].label, "Draws");
}

#[test]
fn test_result_distribution_from_empty_snapshot() {
    let snapshot = AnalyticsSnapshot::default();
    let slices = build_result_distribution(ResultTotals::from(&snapshot));
    assert!(slices.iter().all(|s| s.value == 0));
}

#[test]
fn test_result_distribution_serializes_for_charts() {
    let slices = build_result_distribution(ResultTotals {
        home_wins: 1,
        away_wins: 0,
        draws: 2,
    });
    let value = serde_json::to_value(&slices).unwrap();
    assert_eq!(value[0]["category"], "home_wins");
    assert_eq!(value[0]["label"], "Home wins");
    assert_eq!(value[2]["value"], 2);
}

#[test]
fn test_summarize_formats_figures() {
    let snapshot: AnalyticsSnapshot = serde_json::from_value(json!({
        "total_matches": 38,
        "avg_home_goals": 1.6842,
        "avg_away_goals": 1.1,
        "effectiveness": {
            "shots_conversion": { "home": 11.111, "away": null },
            "possession_impact": { "home_win": 53.25, "away_win": 47.96, "draw": null }
        }
    }))
    .unwrap();

    let stats = summarize(&snapshot);
    assert_eq!(stats.total_matches, 38);
    assert_eq!(stats.avg_home_goals, "1.68");
    assert_eq!(stats.avg_away_goals, "1.10");
    assert_eq!(stats.home_shots_conversion, "11.11%");
    assert_eq!(stats.away_shots_conversion, "N/A");
    assert_eq!(stats.possession_home_win, "53.3%");
    assert_eq!(stats.possession_away_win, "48.0%");
    assert_eq!(stats.possession_draw, "N/A");
}

#[test]
fn test_summarize_half_completed_snapshot() {
    let stats = summarize(&AnalyticsSnapshot::default());
    assert_eq!(stats.total_matches, 0);
    assert_eq!(stats.avg_home_goals, "N/A");
    assert_eq!(stats.home_shots_conversion, "N/A");
}
