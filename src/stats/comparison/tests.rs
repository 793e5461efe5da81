use super::*;
use crate::snapshot::SideStats;

fn team(home: SideStats, away: SideStats) -> TeamSeasonStats {
    TeamSeasonStats { home, away }
}

fn side(played: u32, wins: u32, goals_for: f64, possession: Option<f64>) -> SideStats {
    SideStats {
        played,
        wins,
        goals_for,
        avg_possession: possession,
        ..Default::default()
    }
}

fn league() -> BTreeMap<String, TeamSeasonStats> {
    let mut map = BTreeMap::new();
    map.insert(
        "A".to_string(),
        team(side(5, 3, 9.0, Some(58.2)), side(5, 1, 4.0, Some(47.0))),
    );
    map.insert(
        "B".to_string(),
        team(side(5, 2, 6.0, Some(51.0)), side(4, 2, 5.0, None)),
    );
    map
}

#[test]
fn test_compare_teams_six_rows_in_order() {
    let rows = compare_teams(&league(), "A", "B");

    assert_eq!(rows.len(), 6);
    let categories: Vec<ComparisonCategory> = rows.iter().map(|r| r.category).collect();
    assert_eq!(categories, ComparisonCategory::ALL.to_vec());

    assert_eq!(rows[0].team_a, Some(3.0));
    assert_eq!(rows[0].team_b, Some(2.0));
    assert_eq!(rows[1].team_a, Some(1.0));
    assert_eq!(rows[2].team_a, Some(9.0));
    assert_eq!(rows[3].team_b, Some(5.0));
    assert_eq!(rows[4].team_a, Some(58.2));
    assert_eq!(rows[5].team_b, None);
}

#[test]
fn test_compare_teams_blank_or_unknown_names() {
    let map = league();
    assert!(compare_teams(&map, "", "B").is_empty());
    assert!(compare_teams(&map, "A", "unknown").is_empty());
    assert!(compare_teams(&map, "   ", "A").is_empty());
    assert!(compare_teams(&BTreeMap::new(), "A", "B").is_empty());
}

#[test]
fn test_compare_team_with_itself() {
    let rows = compare_teams(&league(), "A", "A");
    assert!(rows.iter().all(|r| r.team_a == r.team_b));
}

#[test]
fn test_find_team() {
    let map = league();
    assert!(find_team(&map, "A").is_some());
    assert!(find_team(&map, "").is_none());
    assert!(find_team(&map, "a").is_none());
}

#[test]
fn test_category_labels_unique() {
    let mut labels: Vec<&str> = ComparisonCategory::ALL.iter().map(|c| c.label()).collect();
    labels.sort();
    labels.dedup();
    assert_eq!(labels.len(), 6);
}
