//! Integration tests for roster valuation over template league payloads

use league_stats::{
    stats::{compute_valuation_stats, parse_magnitude, rank_by_value, try_parse_magnitude},
    LeagueRoster, StatsError,
};

const LEAGUE_JSON: &str = r#"{
    "name": "Serie A",
    "teams": [
        { "name": "Inter", "value": "664,5M" },
        { "name": "Napoli", "value": "544M" },
        { "name": "Lecce", "value": "91,3M" },
        { "name": "Como", "value": "" },
        { "name": "Monza", "value": "87,4M" },
        { "name": "Venezia" }
    ]
}"#;

fn roster() -> LeagueRoster {
    serde_json::from_str(LEAGUE_JSON).unwrap()
}

#[test]
fn test_valuation_over_template_league() {
    let roster = roster();
    let stats = compute_valuation_stats(&roster.teams).unwrap();

    assert_eq!(stats.valued_count, 4);
    assert_eq!(stats.highest.name, "Inter");
    assert_eq!(stats.highest.raw, "664,5M");
    assert_eq!(stats.lowest.name, "Monza");
    assert_eq!(stats.spread_formatted, "577.1M");
    assert_eq!(stats.average_formatted, "346.8M");
}

#[test]
fn test_ranking_puts_unvalued_teams_last_in_roster_order() {
    let roster = roster();
    let names: Vec<&str> = rank_by_value(&roster.teams)
        .iter()
        .map(|(entry, _)| entry.name.as_str())
        .collect();

    assert_eq!(
        names,
        vec!["Inter", "Napoli", "Lecce", "Monza", "Como", "Venezia"]
    );
}

#[test]
fn test_unparseable_values_count_as_zero_but_strict_parse_reports_them() {
    assert_eq!(parse_magnitude(Some("about 5M")), 0.0);
    assert!(matches!(
        try_parse_magnitude("about 5M"),
        Err(StatsError::InvalidMagnitude { .. })
    ));
}

#[test]
fn test_no_valued_teams() {
    let roster: LeagueRoster =
        serde_json::from_str(r#"{ "name": "Empty", "teams": [{ "name": "A" }, { "name": "B", "value": "" }] }"#)
            .unwrap();
    assert!(compute_valuation_stats(&roster.teams).is_none());
}

#[test]
fn test_unparseable_team_value_stays_in_roster_but_not_in_stats() {
    let mut roster = roster();
    roster.teams.push(serde_json::from_str(r#"{ "name": "Genoa", "value": "n.d." }"#).unwrap());

    let stats = compute_valuation_stats(&roster.teams).unwrap();
    assert_eq!(roster.teams.len(), 7);
    assert_eq!(stats.valued_count, 4);
    assert_eq!(stats.lowest.name, "Monza");
    assert_eq!(stats.average_formatted, "346.8M");

    let last = rank_by_value(&roster.teams).last().map(|(entry, _)| entry.name.clone());
    assert_eq!(last.as_deref(), Some("Genoa"));
}
