//! Summary command: headline figures and result distribution

use anyhow::Result;
use serde::Serialize;

use super::common::{print_json, print_lines, CommandContext};
use crate::{
    cli::SourceArgs,
    dashboard::{Dashboard, DashboardOptions},
    stats::{format_percentage, KeyStats, Slice},
};

#[derive(Debug, Serialize)]
struct SummaryView<'a> {
    key_stats: &'a KeyStats,
    result_distribution: &'a [Slice],
}

/// Text lines for the summary card and the result pie.
pub fn render_summary(dashboard: &Dashboard) -> Vec<String> {
    let stats = &dashboard.key_stats;
    let mut lines = vec![
        format!("Matches played:        {}", stats.total_matches),
        format!("Avg home goals:        {}", stats.avg_home_goals),
        format!("Avg away goals:        {}", stats.avg_away_goals),
        format!("Home shots conversion: {}", stats.home_shots_conversion),
        format!("Away shots conversion: {}", stats.away_shots_conversion),
        String::new(),
        "Results:".to_string(),
    ];

    let decided: u32 = dashboard.result_distribution.iter().map(|s| s.value).sum();
    for slice in &dashboard.result_distribution {
        let share = (decided > 0).then(|| slice.value as f64 / decided as f64 * 100.0);
        lines.push(format!(
            "  {:<10} {:>4} ({})",
            slice.label,
            slice.value,
            format_percentage(share, 1)
        ));
    }

    lines.push(String::new());
    lines.push("Average possession by result:".to_string());
    lines.push(format!("  {:<18} {}", "Home wins", stats.possession_home_win));
    lines.push(format!("  {:<18} {}", "Away wins", stats.possession_away_win));
    lines.push(format!("  {:<18} {}", "Draws (home side)", stats.possession_draw));

    lines
}

/// Handle the summary command
pub async fn handle_summary(source: SourceArgs, verbose: bool) -> Result<()> {
    let ctx = CommandContext::new(&source, verbose).await?;
    let dashboard = ctx.dashboard(DashboardOptions::default())?;

    if source.json {
        print_json(&SummaryView {
            key_stats: &dashboard.key_stats,
            result_distribution: &dashboard.result_distribution,
        })
    } else {
        print_lines(&render_summary(&dashboard));
        Ok(())
    }
}
