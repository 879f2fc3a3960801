//! CLI argument definitions for scoreboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use scoreboard_core::Tier;

#[derive(Parser)]
#[command(name = "scoreboard")]
#[command(about = "High score bridge and leaderboard tool", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, env = "SCOREBOARD_CONFIG", default_value = "scoreboard.toml")]
    pub config: PathBuf,

    /// Score store file (overrides the config file)
    #[arg(long, value_name = "FILE", env = "SCOREBOARD_STORE")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the UI ports as JSON lines over stdin/stdout (default)
    Serve,
    /// Print the top three players of each tier
    Leaderboard {
        /// Only print this tier
        #[arg(long)]
        tier: Option<Tier>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one user's stored record
    Show {
        /// User id
        uid: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Submit scores, writing them only if they beat the stored record
    Submit {
        /// User id
        #[arg(long)]
        uid: String,
        /// Display name stored with the record
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "0")]
        easy: u32,
        #[arg(long, default_value = "0")]
        medium: u32,
        #[arg(long, default_value = "0")]
        hard: u32,
    },
}
