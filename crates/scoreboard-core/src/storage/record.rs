use serde::{Deserialize, Serialize};

use crate::score::{HighScores, Tier};

/// Stored document for one user, keyed by user id in the `users` collection.
///
/// Every field is optional on read: documents written by other clients may
/// lack any of them. Missing scores read as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserScoreRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_score_easy: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_score_medium: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_score_hard: Option<u32>,
}

impl UserScoreRecord {
    /// Build a complete record, as written by a high-score submission
    pub fn new(display_name: impl Into<String>, scores: HighScores) -> Self {
        Self {
            display_name: Some(display_name.into()),
            high_score_easy: Some(scores.easy),
            high_score_medium: Some(scores.medium),
            high_score_hard: Some(scores.hard),
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn score(&self, tier: Tier) -> u32 {
        let value = match tier {
            Tier::Easy => self.high_score_easy,
            Tier::Medium => self.high_score_medium,
            Tier::Hard => self.high_score_hard,
        };
        value.unwrap_or(0)
    }

    pub fn high_scores(&self) -> HighScores {
        HighScores::new(
            self.score(Tier::Easy),
            self.score(Tier::Medium),
            self.score(Tier::Hard),
        )
    }
}

/// Current contents of one document, delivered to watchers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSnapshot {
    pub uid: String,
    /// `None` when no document exists for `uid`
    pub record: Option<UserScoreRecord>,
}
