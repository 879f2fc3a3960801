mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries port messages, so logs always go to stderr
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("scoreboard=info,scoreboard_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli_utils::load_config(&args.config, args.store);

    match args.command {
        Some(Command::Serve) | None => commands::serve::run(&config),
        Some(Command::Leaderboard { tier, json }) => commands::leaderboard::run(&config, tier, json),
        Some(Command::Show { uid, json }) => commands::show::run(&config, &uid, json),
        Some(Command::Submit {
            uid,
            name,
            easy,
            medium,
            hard,
        }) => commands::submit::run(&config, &uid, &name, easy, medium, hard),
    }
}
