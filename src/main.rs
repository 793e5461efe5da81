//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use league_stats::{
    cli::{Commands, LeagueStats},
    commands::{
        summary::handle_summary,
        tactics::handle_tactics,
        teams::{handle_compare, handle_profile, handle_teams},
        trends::handle_trends,
        valuation::{handle_valuation, ValuationParams},
    },
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = LeagueStats::parse();
    let verbose = app.verbose;

    // RUST_LOG still wins when set
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match app.command {
        Commands::Summary { source } => handle_summary(source, verbose).await?,
        Commands::Teams { source } => handle_teams(source, verbose).await?,
        Commands::Compare {
            team_a,
            team_b,
            source,
        } => handle_compare(team_a, team_b, source, verbose).await?,
        Commands::Profile { team, source } => handle_profile(team, source, verbose).await?,
        Commands::Trends { source } => handle_trends(source, verbose).await?,
        Commands::Tactics {
            source,
            limit,
            sort_by_value,
            side,
        } => handle_tactics(source, limit, sort_by_value, side, verbose).await?,
        Commands::Valuation {
            roster_file,
            league,
            template,
            api_url,
            ranked,
            json,
        } => {
            handle_valuation(ValuationParams {
                roster_file,
                league,
                template,
                api_url,
                ranked,
                as_json: json,
                verbose,
            })
            .await?
        }
    }

    Ok(())
}
