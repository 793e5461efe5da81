//! Team commands: listing, two-team comparison and single-team profile

use anyhow::{bail, Result};
use serde::Serialize;

use super::common::{print_json, print_lines, CommandContext};
use crate::{
    cli::SourceArgs,
    dashboard::{default_selection, team_names, TeamSelection, TeamView},
    snapshot::AnalyticsSnapshot,
    stats::{find_team, safe_fixed, ComparisonCategory, RadarPoint},
    StatsError,
};

#[derive(Debug, Serialize)]
struct TeamsView {
    teams: Vec<String>,
    default_selection: Option<TeamSelection>,
}

#[derive(Debug, Serialize)]
struct ProfileView<'a> {
    team: &'a str,
    profile: &'a [RadarPoint],
}

pub fn render_teams(snapshot: &AnalyticsSnapshot) -> Vec<String> {
    let names = team_names(snapshot);
    let mut lines = vec![format!("{} teams", names.len())];
    lines.extend(names.iter().map(|name| format!("  {}", name)));
    if let Some(selection) = default_selection(snapshot) {
        lines.push(format!(
            "Default comparison: {} vs {}",
            selection.team_a, selection.team_b
        ));
    }
    lines
}

/// Fill missing names from the default selection and check both teams exist.
pub fn resolve_pair(
    snapshot: &AnalyticsSnapshot,
    team_a: Option<String>,
    team_b: Option<String>,
) -> Result<(String, String)> {
    let (team_a, team_b) = match (team_a, team_b) {
        (Some(a), Some(b)) => (a, b),
        (a, b) => {
            let Some(selection) = default_selection(snapshot) else {
                bail!(StatsError::NoData);
            };
            (
                a.unwrap_or(selection.team_a),
                b.unwrap_or(selection.team_b),
            )
        }
    };

    for name in [&team_a, &team_b] {
        ensure_team(snapshot, name)?;
    }
    Ok((team_a, team_b))
}

fn ensure_team(snapshot: &AnalyticsSnapshot, name: &str) -> Result<()> {
    if find_team(&snapshot.team_stats, name).is_none() {
        bail!(StatsError::TeamNotFound {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn comparison_digits(category: ComparisonCategory) -> usize {
    match category {
        ComparisonCategory::HomeWins | ComparisonCategory::AwayWins => 0,
        _ => 2,
    }
}

pub fn render_comparison(view: &TeamView) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<22} {:>14} {:>14}",
        "", view.team_a, view.team_b
    )];
    for row in &view.comparison {
        let digits = comparison_digits(row.category);
        lines.push(format!(
            "{:<22} {:>14} {:>14}",
            row.label,
            safe_fixed(row.team_a, digits),
            safe_fixed(row.team_b, digits)
        ));
    }
    lines
}

pub fn render_profile(team: &str, profile: &[RadarPoint]) -> Vec<String> {
    let mut lines = vec![format!("Profile: {}", team)];
    lines.extend(
        profile
            .iter()
            .map(|point| format!("  {:<18} {:>7}", point.label, safe_fixed(Some(point.value), 1))),
    );
    lines
}

/// Handle the teams command
pub async fn handle_teams(source: SourceArgs, verbose: bool) -> Result<()> {
    let ctx = CommandContext::new(&source, verbose).await?;

    if source.json {
        print_json(&TeamsView {
            teams: team_names(&ctx.snapshot),
            default_selection: default_selection(&ctx.snapshot),
        })
    } else {
        print_lines(&render_teams(&ctx.snapshot));
        Ok(())
    }
}

/// Handle the compare command
pub async fn handle_compare(
    team_a: Option<String>,
    team_b: Option<String>,
    source: SourceArgs,
    verbose: bool,
) -> Result<()> {
    let ctx = CommandContext::new(&source, verbose).await?;
    let (team_a, team_b) = resolve_pair(&ctx.snapshot, team_a, team_b)?;
    let view = ctx.team_view(&team_a, &team_b)?;

    if source.json {
        print_json(view.as_ref())
    } else {
        print_lines(&render_comparison(&view));
        Ok(())
    }
}

/// Handle the profile command
pub async fn handle_profile(team: String, source: SourceArgs, verbose: bool) -> Result<()> {
    let ctx = CommandContext::new(&source, verbose).await?;
    ensure_team(&ctx.snapshot, &team)?;
    let view = ctx.team_view(&team, &team)?;

    if source.json {
        print_json(&ProfileView {
            team: &team,
            profile: &view.profile_a,
        })
    } else {
        print_lines(&render_profile(&team, &view.profile_a));
        Ok(())
    }
}
