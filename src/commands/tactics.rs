//! Tactics command: formation and play-style top lists per side

use anyhow::Result;
use serde::Serialize;

use super::common::{print_json, print_lines, CommandContext};
use crate::{
    cli::{tactics_options, SourceArgs},
    dashboard::Dashboard,
    snapshot::Side,
    stats::{safe_fixed, LabeledValue},
};

#[derive(Debug, Serialize)]
struct SideTactics<'a> {
    side: Side,
    formations: &'a [LabeledValue],
    effective_formations: &'a [LabeledValue],
    play_styles: &'a [LabeledValue],
}

fn side_tactics(dashboard: &Dashboard, side: Side) -> SideTactics<'_> {
    SideTactics {
        side,
        formations: dashboard.formations.side(side),
        effective_formations: dashboard.effective_formations.side(side),
        play_styles: dashboard.play_styles.side(side),
    }
}

fn render_list(title: &str, entries: &[LabeledValue], digits: usize, lines: &mut Vec<String>) {
    lines.push(format!("  {}:", title));
    if entries.is_empty() {
        lines.push("    (none)".to_string());
    }
    for entry in entries {
        lines.push(format!(
            "    {:<20} {:>8}",
            entry.label,
            safe_fixed(entry.value, digits)
        ));
    }
}

pub fn render_tactics(dashboard: &Dashboard, sides: &[Side]) -> Vec<String> {
    let mut lines = Vec::new();
    for &side in sides {
        let tactics = side_tactics(dashboard, side);
        let title = match side {
            Side::Home => "Home",
            Side::Away => "Away",
        };
        lines.push(format!("{}:", title));
        render_list("Most used formations", tactics.formations, 0, &mut lines);
        render_list(
            "Most effective formations (win %)",
            tactics.effective_formations,
            1,
            &mut lines,
        );
        render_list("Goals by play style", tactics.play_styles, 2, &mut lines);
    }
    lines
}

/// Handle the tactics command
pub async fn handle_tactics(
    source: SourceArgs,
    limit: usize,
    sort_by_value: bool,
    side: Option<Side>,
    verbose: bool,
) -> Result<()> {
    let ctx = CommandContext::new(&source, verbose).await?;
    let dashboard = ctx.dashboard(tactics_options(limit, sort_by_value))?;
    let sides: Vec<Side> = side.map_or_else(|| Side::BOTH.to_vec(), |s| vec![s]);

    if source.json {
        let view: Vec<SideTactics> = sides.iter().map(|&s| side_tactics(&dashboard, s)).collect();
        print_json(&view)
    } else {
        print_lines(&render_tactics(&dashboard, &sides));
        Ok(())
    }
}
