//! PitchScope CLI: pitch analytics from the terminal.
//!
//! Usage:
//!   pitchscope pitchers [--hand L|R] [--name Q]   List or search pitchers
//!   pitchscope seasons --pitcher ID               Seasons a pitcher appears in
//!   pitchscope summary --pitcher ID [--season N]  Headline figures for a scope
//!   pitchscope usage --pitcher ID                 Yearly pitch-type usage
//!   pitchscope tiers --pitcher ID                 Velocity-tier distribution
//!   pitchscope movement --pitcher ID              Speed and break statistics
//!   pitchscope labels --pitcher ID                Pitch-label leaderboard
//!   pitchscope zones --pitcher ID                 Zone-quality grids
//!   pitchscope report --pitcher ID                Everything above in one go

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pitchscope_model::category::Hand;

mod commands;
mod context;
mod table;

#[derive(Parser)]
#[command(
    name = "pitchscope",
    about = "Pitch usage, velocity tiers, movement, and zone quality per pitcher",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON instead of text tables
    #[arg(long, global = true)]
    json: bool,

    /// Pitch table (overrides config)
    #[arg(long, global = true)]
    pitches: Option<PathBuf>,

    /// Zone-quality table (overrides config)
    #[arg(long, global = true)]
    zones: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Pitcher and season selection shared by the scoped commands.
#[derive(Args, Debug, Clone)]
pub struct ScopeArgs {
    /// Pitcher id
    #[arg(short, long)]
    pub pitcher: String,

    /// Season to include; repeat for several. Defaults to every season the pitcher appears in.
    #[arg(short, long = "season")]
    pub seasons: Vec<i32>,
}

#[derive(Subcommand)]
enum Commands {
    /// List pitchers, optionally filtered by hand and name
    Pitchers {
        /// Throwing hand (L or R)
        #[arg(long)]
        hand: Option<Hand>,

        /// Case-insensitive name substring (at least 2 characters)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Show the seasons a pitcher appears in
    Seasons {
        /// Pitcher id
        #[arg(short, long)]
        pitcher: String,
    },

    /// Show headline figures for a scope
    Summary {
        #[command(flatten)]
        scope: ScopeArgs,
    },

    /// Show yearly pitch-type usage
    Usage {
        #[command(flatten)]
        scope: ScopeArgs,
    },

    /// Show the velocity-tier distribution per pitch type
    Tiers {
        #[command(flatten)]
        scope: ScopeArgs,
    },

    /// Show speed and break statistics and movement buckets
    Movement {
        #[command(flatten)]
        scope: ScopeArgs,

        /// Also print every pitch's break
        #[arg(long)]
        points: bool,
    },

    /// Show the most used pitch labels
    Labels {
        #[command(flatten)]
        scope: ScopeArgs,

        /// Number of labels (defaults to config)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show zone-quality grids
    Zones {
        #[command(flatten)]
        scope: ScopeArgs,

        /// Batter hand (defaults to config)
        #[arg(long)]
        batter: Option<Hand>,

        /// Pitch type to show; repeat for several. Defaults to the most frequent ones.
        #[arg(long = "pitch-type")]
        pitch_types: Vec<String>,

        /// Also print the zone detail table
        #[arg(long)]
        detail: bool,
    },

    /// Build the full report for a scope
    Report {
        #[command(flatten)]
        scope: ScopeArgs,

        /// Batter hand for zone grids (defaults to config)
        #[arg(long)]
        batter: Option<Hand>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = pitchscope_common::config::AppConfig::load();
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    pitchscope_common::logging::init_logging(&config.logging);

    let ctx = context::Context::new(config, cli.pitches, cli.zones, cli.json);

    match cli.command {
        Commands::Pitchers { hand, name } => commands::pitchers::run(&ctx, hand, name),
        Commands::Seasons { pitcher } => commands::seasons::run(&ctx, pitcher),
        Commands::Summary { scope } => commands::summary::run(&ctx, scope),
        Commands::Usage { scope } => commands::usage::run(&ctx, scope),
        Commands::Tiers { scope } => commands::tiers::run(&ctx, scope),
        Commands::Movement { scope, points } => commands::movement::run(&ctx, scope, points),
        Commands::Labels { scope, limit } => commands::labels::run(&ctx, scope, limit),
        Commands::Zones {
            scope,
            batter,
            pitch_types,
            detail,
        } => commands::zones::run(&ctx, scope, batter, pitch_types, detail),
        Commands::Report { scope, batter } => commands::report::run(&ctx, scope, batter),
    }
}
