use super::*;
use crate::snapshot::{GoalsTrend, RoundSeries};
use serde_json::json;

#[test]
fn test_merge_skips_rounds_missing_from_home_series() {
    let by_jornada = ByJornada {
        goals_trend: GoalsTrend {
            home_goals: RoundSeries::from_pairs(vec![(1, 2.0), (3, 1.0)]),
            away_goals: RoundSeries::from_pairs(vec![(1, 0.0)]),
        },
        ..Default::default()
    };

    let points = merge_journey_trends(&by_jornada);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].round, 1);
    assert_eq!(points[0].home_goals, Some(2.0));
    assert_eq!(points[1].round, 3);
    assert_eq!(points[1].label, "J3");
    assert_eq!(points[1].away_goals, 0.0);
    assert_eq!(points[1].home_possession, 0.0);
    assert_eq!(points[1].outcomes, None);
}

#[test]
fn test_merge_orders_rounds_numerically() {
    let by_jornada: ByJornada = serde_json::from_str(
        r#"{ "goals_trend": { "home_goals": {"10": 3, "2": 1, "1": 0, "9": 2} } }"#,
    )
    .unwrap();

    let rounds: Vec<u32> = merge_journey_trends(&by_jornada)
        .iter()
        .map(|p| p.round)
        .collect();
    assert_eq!(rounds, vec![1, 2, 9, 10]);
}

#[test]
fn test_merge_full_backend_payload() {
    let by_jornada: ByJornada = serde_json::from_value(json!({
        "goals_trend": {
            "home_goals": { "1": 4.0, "2": 2.0 },
            "away_goals": { "1": 1.0, "2": 3.0 }
        },
        "possession_trend": {
            "home_possession": { "1": 55.5, "2": 48.0 },
            "away_possession": { "1": 44.5 }
        },
        "results_distribution": {
            "A": { "1": 0.0, "2": 2.0 },
            "D": { "1": 1.0, "2": 0.0 },
            "H": { "1": 1.0, "2": 0.0 }
        }
    }))
    .unwrap();

    let points = merge_journey_trends(&by_jornada);
    assert_eq!(points.len(), 2);

    let first = &points[0];
    assert_eq!(first.away_goals, 1.0);
    assert_eq!(first.home_possession, 55.5);
    assert_eq!(first.away_possession, 44.5);
    assert_eq!(
        first.outcomes,
        Some(RoundOutcomes {
            home_wins: 1,
            draws: 1,
            away_wins: 0
        })
    );

    let second = &points[1];
    assert_eq!(second.away_possession, 0.0);
    assert_eq!(second.outcomes.unwrap().away_wins, 2);
}

#[test]
fn test_merge_null_home_goals_passes_through() {
    let by_jornada: ByJornada = serde_json::from_str(
        r#"{ "goals_trend": { "home_goals": {"1": null}, "away_goals": {"1": null} } }"#,
    )
    .unwrap();

    let points = merge_journey_trends(&by_jornada);
    assert_eq!(points[0].home_goals, None);
    assert_eq!(points[0].away_goals, 0.0);
}

#[test]
fn test_merge_empty() {
    assert!(merge_journey_trends(&ByJornada::default()).is_empty());
}

#[test]
fn test_trend_point_serialization_omits_missing_outcomes() {
    let point = TrendPoint {
        round: 4,
        label: round_label(4),
        home_goals: Some(1.0),
        away_goals: 2.0,
        home_possession: 50.0,
        away_possession: 50.0,
        outcomes: None,
    };
    let value = serde_json::to_value(&point).unwrap();
    assert_eq!(value["label"], "J4");
    assert!(value.get("outcomes").is_none());
}
