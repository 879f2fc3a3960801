//! Leaderboard command: print the top three players of each tier.

use std::fmt::Write as _;

use anyhow::Result;
use owo_colors::OwoColorize;
use scoreboard_core::{Config, Leaderboards, Podium, ScoreStore, Tier, compute_leaderboards};

use crate::cli_utils;

pub fn run(config: &Config, tier: Option<Tier>, json: bool) -> Result<()> {
    let store = cli_utils::open_store(config)?;
    let leaderboards = compute_leaderboards(&store.list()?);

    if json {
        let output = match tier {
            Some(tier) => serde_json::to_string_pretty(leaderboards.tier(tier))?,
            None => serde_json::to_string_pretty(&leaderboards)?,
        };
        println!("{}", output);
    } else {
        print!("{}", format_leaderboards(&leaderboards, tier));
    }
    Ok(())
}

fn format_tier_label(tier: Tier) -> String {
    match tier {
        Tier::Easy => tier.expand_name().green().to_string(),
        Tier::Medium => tier.expand_name().yellow().to_string(),
        Tier::Hard => tier.expand_name().red().to_string(),
    }
}

fn format_podium(output: &mut String, podium: &Podium) {
    if podium.is_empty() {
        let _ = writeln!(output, "  {}", "(no scores)".dimmed());
        return;
    }
    for rank in 1..=3 {
        if let Some(entry) = podium.rank(rank) {
            let name = entry.name.as_deref().unwrap_or("(anonymous)");
            let _ = writeln!(output, "  {}. {:<20} {:>8}", rank, name.bold(), entry.high_score);
        }
    }
}

/// Render the podiums, either every tier or only `only`.
pub fn format_leaderboards(leaderboards: &Leaderboards, only: Option<Tier>) -> String {
    let mut output = String::new();
    for tier in Tier::ALL {
        if only.is_some_and(|only| only != tier) {
            continue;
        }
        let _ = writeln!(output, "{}", format_tier_label(tier));
        format_podium(&mut output, leaderboards.tier(tier));
    }
    output
}
