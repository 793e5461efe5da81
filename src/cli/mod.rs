//! CLI argument definitions and parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::api::DEFAULT_TEMPLATE;
use crate::dashboard::DashboardOptions;
use crate::snapshot::Side;
use crate::stats::{TopOrder, DEFAULT_TOP_LIMIT};


/// Where the snapshot comes from and how results are printed.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Read the snapshot from a saved `/analysis/` JSON file instead of the service.
    #[clap(long, short)]
    pub file: Option<PathBuf>,

    /// Analytics service base URL (or set `LEAGUE_STATS_API_URL` env var).
    #[clap(long)]
    pub api_url: Option<String>,

    /// Force refresh from the service, overwriting the cached snapshot.
    #[clap(long)]
    pub refresh: bool,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "league-stats", about = "Football league analytics CLI")]
pub struct LeagueStats {
    /// Show progress messages and debug logs.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Headline figures and the overall result distribution.
    Summary {
        #[clap(flatten)]
        source: SourceArgs,
    },

    /// List the teams in the snapshot and the default comparison pair.
    Teams {
        #[clap(flatten)]
        source: SourceArgs,
    },

    /// Compare two teams side by side.
    ///
    /// Without team names the first two teams in alphabetical order are used.
    Compare {
        team_a: Option<String>,
        team_b: Option<String>,

        #[clap(flatten)]
        source: SourceArgs,
    },

    /// Seven-axis performance profile of one team.
    Profile {
        team: String,

        #[clap(flatten)]
        source: SourceArgs,
    },

    /// Goals, possession and results per round.
    Trends {
        #[clap(flatten)]
        source: SourceArgs,
    },

    /// Most used formations, most effective formations and play-style goals.
    Tactics {
        #[clap(flatten)]
        source: SourceArgs,

        /// Entries shown per list.
        #[clap(long, short, default_value_t = DEFAULT_TOP_LIMIT)]
        limit: usize,

        /// Sort lists by value instead of keeping the service's order.
        #[clap(long)]
        sort_by_value: bool,

        /// Only show one side: home or away.
        #[clap(long)]
        side: Option<Side>,
    },

    /// Highest, lowest, average and spread of roster valuations.
    ///
    /// Reads a roster file (a league object or a bare list of teams) or fetches
    /// `/templates/{template}/leagues/{league}` from the service.
    Valuation {
        /// JSON roster file.
        #[clap(long, conflicts_with = "league")]
        roster_file: Option<PathBuf>,

        /// Template league name to fetch.
        #[clap(long)]
        league: Option<String>,

        /// Template set the league belongs to.
        #[clap(long, default_value = DEFAULT_TEMPLATE)]
        template: String,

        /// Analytics service base URL (or set `LEAGUE_STATS_API_URL` env var).
        #[clap(long)]
        api_url: Option<String>,

        /// Also list every team ranked by value.
        #[clap(long)]
        ranked: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

/// Dashboard options for the `tactics` flags.
pub fn tactics_options(limit: usize, sort_by_value: bool) -> DashboardOptions {
    DashboardOptions {
        top_limit: limit,
        top_order: if sort_by_value {
            TopOrder::ByValueDesc
        } else {
            TopOrder::AsDelivered
        },
    }
}
