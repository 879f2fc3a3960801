//! Score-related types.
//!
//! - `Tier` - difficulty tiers (easy, medium, hard)
//! - `HighScores` - one high score per tier

mod high_scores;
mod tier;

pub use high_scores::*;
pub use tier::*;
