//! Submit command: apply the high score policy against the stored record.

use anyhow::Result;
use owo_colors::OwoColorize;
use scoreboard_core::{
    Config, HighScoreSubmission, HighScores, PersistOutcome, ScoreStore, persist_high_score,
};
use tracing::debug;

use crate::cli_utils;

pub fn run(config: &Config, uid: &str, name: &str, easy: u32, medium: u32, hard: u32) -> Result<()> {
    let mut store = cli_utils::open_store(config)?;
    let submission = HighScoreSubmission::new(uid, name, HighScores::new(easy, medium, hard));

    let outcome = submit(&mut store, &submission)?;
    match outcome {
        PersistOutcome::Saved => println!("{} high score for {}", "Saved".green(), uid),
        PersistOutcome::Unchanged => println!(
            "{}: no tier beats the stored record for {}",
            "Unchanged".yellow(),
            uid
        ),
        PersistOutcome::MissingUser => println!("{}: empty user id", "Ignored".red()),
    }
    Ok(())
}

/// The stored record stands in for the cached best of a signed-in session.
fn submit<S: ScoreStore>(store: &mut S, submission: &HighScoreSubmission) -> Result<PersistOutcome> {
    let cached_best = store
        .get(&submission.uid)?
        .map(|record| record.high_scores())
        .unwrap_or_default();
    debug!("Stored best for {}: {:?}", submission.uid, cached_best);

    Ok(persist_high_score(store, submission, &cached_best)?)
}
