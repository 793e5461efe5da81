//! Trends command: per-round goals, possession and outcomes

use anyhow::Result;

use super::common::{print_json, print_lines, CommandContext};
use crate::{
    cli::SourceArgs,
    dashboard::DashboardOptions,
    stats::{safe_fixed, TrendPoint},
};

pub fn render_trends(points: &[TrendPoint]) -> Vec<String> {
    if points.is_empty() {
        return vec!["No per-round data available".to_string()];
    }

    let mut lines = vec![format!(
        "{:<6} {:>6} {:>6} {:>8} {:>8}  {}",
        "Round", "HG", "AG", "H poss", "A poss", "H-D-A"
    )];
    for point in points {
        let outcomes = point
            .outcomes
            .map(|o| format!("{}-{}-{}", o.home_wins, o.draws, o.away_wins))
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!(
            "{:<6} {:>6} {:>6} {:>8} {:>8}  {}",
            point.label,
            safe_fixed(point.home_goals, 2),
            safe_fixed(Some(point.away_goals), 2),
            safe_fixed(Some(point.home_possession), 1),
            safe_fixed(Some(point.away_possession), 1),
            outcomes
        ));
    }
    lines
}

/// Handle the trends command
pub async fn handle_trends(source: SourceArgs, verbose: bool) -> Result<()> {
    let ctx = CommandContext::new(&source, verbose).await?;
    let dashboard = ctx.dashboard(DashboardOptions::default())?;

    if source.json {
        print_json(&dashboard.trends)
    } else {
        print_lines(&render_trends(&dashboard.trends));
        Ok(())
    }
}
