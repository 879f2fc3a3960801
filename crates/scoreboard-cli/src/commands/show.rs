//! Show command: print one user's stored record.

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use scoreboard_core::{Config, ScoreStore, Tier, UserScoreRecord};

use crate::cli_utils;

pub fn run(config: &Config, uid: &str, json: bool) -> Result<()> {
    let store = cli_utils::open_store(config)?;
    let Some(record) = store.get(uid)? else {
        bail!("No record stored for user {}", uid);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", format_record(uid, &record));
    }
    Ok(())
}

fn format_record(uid: &str, record: &UserScoreRecord) -> String {
    let mut output = format!(
        "{} ({})\n",
        record.display_name().unwrap_or("(anonymous)").bold(),
        uid.dimmed()
    );
    for tier in Tier::ALL {
        output.push_str(&format!("  {:<7}: {}\n", tier.expand_name(), record.score(tier)));
    }
    output
}
