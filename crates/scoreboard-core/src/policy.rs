//! High-score update policy.
//!
//! A submission is written only when it beats the session's cached best on at
//! least one tier. The write replaces the whole stored document: the other
//! tiers take the submitted values even if those are lower than what is
//! stored.
//!
//! The decision is made against the local cache, not the stored document, so
//! two submissions checked against the same stale cache both write and the
//! later one wins.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::score::HighScores;
use crate::storage::{ScoreStore, UserScoreRecord};

/// Payload of the `saveHighScore` port
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreSubmission {
    #[serde(default)]
    pub uid: String,
    #[serde(rename = "displayname", default)]
    pub display_name: String,
    #[serde(default)]
    pub easy: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub hard: u32,
}

impl HighScoreSubmission {
    pub fn new(uid: &str, display_name: &str, scores: HighScores) -> Self {
        Self {
            uid: uid.to_string(),
            display_name: display_name.to_string(),
            easy: scores.easy,
            medium: scores.medium,
            hard: scores.hard,
        }
    }

    pub fn scores(&self) -> HighScores {
        HighScores::new(self.easy, self.medium, self.hard)
    }

    /// Document written for this submission
    pub fn to_record(&self) -> UserScoreRecord {
        UserScoreRecord::new(self.display_name.clone(), self.scores())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    /// The document was overwritten with the submission
    Saved,
    /// No tier beat the cached best; nothing was written
    Unchanged,
    /// The submission carried no user id; nothing was written
    MissingUser,
}

/// True iff any submitted tier strictly exceeds the cached best for that tier.
pub fn should_persist(submitted: &HighScores, cached_best: &HighScores) -> bool {
    submitted.improves_on(cached_best)
}

/// Apply the policy and write the submission if it qualifies.
pub fn persist_high_score<S: ScoreStore + ?Sized>(
    store: &mut S,
    submission: &HighScoreSubmission,
    cached_best: &HighScores,
) -> Result<PersistOutcome> {
    if submission.uid.is_empty() {
        debug!("Ignoring high score submission without a user id");
        return Ok(PersistOutcome::MissingUser);
    }

    let submitted = submission.scores();
    if !should_persist(&submitted, cached_best) {
        debug!(
            "Submission {:?} does not beat cached best {:?}",
            submitted, cached_best
        );
        return Ok(PersistOutcome::Unchanged);
    }

    info!("Saving high score for {}: {:?}", submission.uid, submitted);
    store.set(&submission.uid, submission.to_record())?;
    Ok(PersistOutcome::Saved)
}
