use serde::{Deserialize, Serialize};

use crate::score::Tier;

/// One high score per tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScores {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl HighScores {
    pub fn new(easy: u32, medium: u32, hard: u32) -> Self {
        Self { easy, medium, hard }
    }

    pub fn get(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Easy => self.easy,
            Tier::Medium => self.medium,
            Tier::Hard => self.hard,
        }
    }

    pub fn set(&mut self, tier: Tier, score: u32) {
        match tier {
            Tier::Easy => self.easy = score,
            Tier::Medium => self.medium = score,
            Tier::Hard => self.hard = score,
        }
    }

    /// Raise every tier to at least the value in `other`.
    pub fn update(&mut self, other: &HighScores) {
        for tier in Tier::ALL {
            if other.get(tier) > self.get(tier) {
                self.set(tier, other.get(tier));
            }
        }
    }

    /// True if any tier strictly exceeds the same tier in `best`.
    pub fn improves_on(&self, best: &HighScores) -> bool {
        Tier::ALL
            .iter()
            .any(|&tier| self.get(tier) > best.get(tier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_is_elementwise_max() {
        let mut best = HighScores::new(10, 5, 1);
        best.update(&HighScores::new(8, 9, 1));
        assert_eq!(best, HighScores::new(10, 9, 1));

        best.update(&HighScores::default());
        assert_eq!(best, HighScores::new(10, 9, 1));
    }

    #[test]
    fn test_improves_on() {
        let best = HighScores::new(10, 5, 1);
        assert!(HighScores::new(8, 9, 1).improves_on(&best));
        assert!(HighScores::new(10, 5, 2).improves_on(&best));
        assert!(!HighScores::new(10, 5, 1).improves_on(&best));
        assert!(!HighScores::new(0, 0, 0).improves_on(&best));
    }

    #[test]
    fn test_get_set_by_tier() {
        let mut scores = HighScores::default();
        scores.set(Tier::Medium, 42);
        assert_eq!(scores.get(Tier::Medium), 42);
        assert_eq!(scores.get(Tier::Easy), 0);
    }
}
