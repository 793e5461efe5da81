//! Valuation command: statistics over a league roster's team values

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::common::{print_json, print_lines};
use crate::{
    api::{build_client, fetch_league_roster, resolve_api_url},
    snapshot::{LeagueRoster, RosterEntry},
    stats::{compute_valuation_stats, format_magnitude, rank_by_value, ValuationStats},
    StatsError,
};

/// Roster files come either as the service's league object or as a bare team list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RosterFile {
    League(LeagueRoster),
    Teams(Vec<RosterEntry>),
}

impl RosterFile {
    fn into_roster(self, fallback_name: &str) -> LeagueRoster {
        match self {
            RosterFile::League(roster) => roster,
            RosterFile::Teams(teams) => LeagueRoster {
                name: fallback_name.to_string(),
                teams,
            },
        }
    }
}

/// Parameters for the valuation command
#[derive(Debug, Default)]
pub struct ValuationParams {
    pub roster_file: Option<std::path::PathBuf>,
    pub league: Option<String>,
    pub template: String,
    pub api_url: Option<String>,
    pub ranked: bool,
    pub as_json: bool,
    pub verbose: bool,
}

#[derive(Debug, Serialize)]
struct ValuationView<'a> {
    league: &'a str,
    teams: usize,
    stats: Option<&'a ValuationStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ranked: Option<Vec<RankedTeam<'a>>>,
}

#[derive(Debug, Serialize)]
struct RankedTeam<'a> {
    name: &'a str,
    raw: Option<&'a str>,
    value: f64,
}

pub fn load_roster_file(path: &Path) -> Result<LeagueRoster> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading roster file {}", path.display()))?;
    let parsed: RosterFile = serde_json::from_str(&contents)
        .with_context(|| format!("parsing roster file {}", path.display()))?;
    let fallback = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    Ok(parsed.into_roster(&fallback))
}

pub fn render_valuation(roster: &LeagueRoster, stats: Option<&ValuationStats>) -> Vec<String> {
    let mut lines = vec![format!("{} ({} teams)", roster.name, roster.teams.len())];

    let Some(stats) = stats else {
        lines.push("No team valuations available".to_string());
        return lines;
    };

    lines.push(format!(
        "  Highest: {} ({})",
        stats.highest.name, stats.highest.raw
    ));
    lines.push(format!("  Lowest:  {} ({})", stats.lowest.name, stats.lowest.raw));
    lines.push(format!("  Average: {}", stats.average_formatted));
    lines.push(format!("  Spread:  {}", stats.spread_formatted));
    lines.push(format!(
        "  Total:   {} across {} valued teams",
        format_magnitude(stats.total),
        stats.valued_count
    ));
    lines
}

pub fn render_ranking(roster: &LeagueRoster) -> Vec<String> {
    rank_by_value(&roster.teams)
        .into_iter()
        .enumerate()
        .map(|(i, (entry, _))| {
            format!(
                "  {:>2}. {:<24} {:>10}",
                i + 1,
                entry.name,
                entry.raw_value().unwrap_or("-")
            )
        })
        .collect()
}

/// Handle the valuation command
pub async fn handle_valuation(params: ValuationParams) -> Result<()> {
    let roster = match (&params.roster_file, &params.league) {
        (Some(path), _) => load_roster_file(path)?,
        (None, Some(league)) => {
            let api_url = resolve_api_url(params.api_url.clone());
            if params.verbose {
                println!("Fetching {} from {}...", league, api_url);
            }
            let client = build_client()?;
            // tarpaulin::skip - HTTP API call
            fetch_league_roster(&client, &api_url, &params.template, league)
                .await
                .with_context(|| format!("fetching league {}", league))?
        }
        (None, None) => return Err(StatsError::NoRosterSource.into()),
    };

    let stats = compute_valuation_stats(&roster.teams);
    if stats.is_none() {
        log::info!("no valued teams in {}", roster.name);
    }

    if params.as_json {
        let ranked = params.ranked.then(|| {
            rank_by_value(&roster.teams)
                .into_iter()
                .map(|(entry, value)| RankedTeam {
                    name: &entry.name,
                    raw: entry.raw_value(),
                    value,
                })
                .collect()
        });
        return print_json(&ValuationView {
            league: &roster.name,
            teams: roster.teams.len(),
            stats: stats.as_ref(),
            ranked,
        });
    }

    print_lines(&render_valuation(&roster, stats.as_ref()));
    if params.ranked {
        print_lines(&render_ranking(&roster));
    }
    Ok(())
}
