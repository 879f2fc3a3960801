//! Top-three leaderboards per tier.
//!
//! Each computation is a full pass over a snapshot of every stored record;
//! nothing is cached between runs.

use serde::{Deserialize, Serialize};

use crate::config::leaderboard::PODIUM_SIZE;
use crate::score::Tier;
use crate::storage::UserScoreRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub name: Option<String>,
    pub high_score: u32,
}

/// Ranked entries for one tier. Ranks with no entry are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Podium {
    pub first: Option<LeaderboardEntry>,
    pub second: Option<LeaderboardEntry>,
    pub third: Option<LeaderboardEntry>,
}

impl Podium {
    fn from_ranked(ranked: Vec<LeaderboardEntry>) -> Self {
        let mut ranked = ranked.into_iter();
        Self {
            first: ranked.next(),
            second: ranked.next(),
            third: ranked.next(),
        }
    }

    /// Entry at a 1-indexed rank
    pub fn rank(&self, rank: usize) -> Option<&LeaderboardEntry> {
        match rank {
            1 => self.first.as_ref(),
            2 => self.second.as_ref(),
            3 => self.third.as_ref(),
            _ => None,
        }
    }

    /// Present entries, best first
    pub fn entries(&self) -> impl Iterator<Item = &LeaderboardEntry> {
        [&self.first, &self.second, &self.third]
            .into_iter()
            .filter_map(|entry| entry.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboards {
    pub easy: Podium,
    pub medium: Podium,
    pub hard: Podium,
}

impl Leaderboards {
    pub fn tier(&self, tier: Tier) -> &Podium {
        match tier {
            Tier::Easy => &self.easy,
            Tier::Medium => &self.medium,
            Tier::Hard => &self.hard,
        }
    }
}

/// Rank every record on one tier: score descending, ties in input order,
/// at most three entries.
pub fn rank_tier(records: &[UserScoreRecord], tier: Tier) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = records
        .iter()
        .map(|record| LeaderboardEntry {
            name: record.display_name.clone(),
            high_score: record.score(tier),
        })
        .collect();

    // sort_by is stable
    entries.sort_by(|a, b| b.high_score.cmp(&a.high_score));
    entries.truncate(PODIUM_SIZE);
    entries
}

pub fn compute_leaderboards(records: &[UserScoreRecord]) -> Leaderboards {
    Leaderboards {
        easy: Podium::from_ranked(rank_tier(records, Tier::Easy)),
        medium: Podium::from_ranked(rank_tier(records, Tier::Medium)),
        hard: Podium::from_ranked(rank_tier(records, Tier::Hard)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::HighScores;

    fn record(name: &str, easy: u32, medium: u32, hard: u32) -> UserScoreRecord {
        UserScoreRecord::new(name, HighScores::new(easy, medium, hard))
    }

    fn entry(name: &str, score: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            name: Some(name.to_string()),
            high_score: score,
        }
    }

    #[test]
    fn test_easy_ranking() {
        let records = vec![
            record("A", 10, 5, 1),
            record("B", 20, 5, 1),
            record("C", 15, 5, 1),
        ];
        let ranked = rank_tier(&records, Tier::Easy);
        assert_eq!(ranked, vec![entry("B", 20), entry("C", 15), entry("A", 10)]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![
            record("A", 10, 5, 1),
            record("B", 20, 5, 1),
            record("C", 15, 5, 1),
        ];
        let ranked = rank_tier(&records, Tier::Medium);
        assert_eq!(ranked, vec![entry("A", 5), entry("B", 5), entry("C", 5)]);
    }

    #[test]
    fn test_only_top_three() {
        let records = vec![
            record("A", 1, 0, 0),
            record("B", 2, 0, 0),
            record("C", 3, 0, 0),
            record("D", 4, 0, 0),
            record("E", 5, 0, 0),
        ];
        let boards = compute_leaderboards(&records);
        let names: Vec<_> = boards
            .easy
            .entries()
            .map(|e| e.name.clone().unwrap())
            .collect();
        assert_eq!(names, vec!["E", "D", "C"]);
    }

    #[test]
    fn test_fewer_than_three_records() {
        let records = vec![record("Solo", 7, 8, 9)];
        let boards = compute_leaderboards(&records);

        assert_eq!(boards.hard.first, Some(entry("Solo", 9)));
        assert_eq!(boards.hard.second, None);
        assert_eq!(boards.hard.third, None);
        assert_eq!(boards.hard.len(), 1);
    }

    #[test]
    fn test_no_records() {
        let boards = compute_leaderboards(&[]);
        for tier in Tier::ALL {
            assert!(boards.tier(tier).is_empty());
            assert_eq!(boards.tier(tier).rank(1), None);
        }
    }

    #[test]
    fn test_missing_fields() {
        let records = vec![
            UserScoreRecord {
                high_score_easy: Some(3),
                ..Default::default()
            },
            record("B", 1, 0, 0),
        ];
        let ranked = rank_tier(&records, Tier::Easy);
        assert_eq!(ranked[0].name, None);
        assert_eq!(ranked[0].high_score, 3);
        assert_eq!(rank_tier(&records, Tier::Hard)[0].high_score, 0);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let records = vec![
            record("A", 3, 1, 2),
            record("B", 3, 2, 1),
            record("C", 1, 3, 3),
        ];
        assert_eq!(compute_leaderboards(&records), compute_leaderboards(&records));
    }

    #[test]
    fn test_ranks_are_sorted_subset_of_input() {
        let records: Vec<_> = (0..10u32)
            .map(|i| record(&format!("P{}", i), (i * 7) % 11, (i * 3) % 5, i))
            .collect();
        let boards = compute_leaderboards(&records);

        for tier in Tier::ALL {
            let entries: Vec<_> = boards.tier(tier).entries().collect();
            assert!(entries.len() <= 3);
            assert!(entries.windows(2).all(|w| w[0].high_score >= w[1].high_score));
            for e in &entries {
                assert!(records.iter().any(|r| {
                    r.display_name == e.name && r.score(tier) == e.high_score
                }));
            }
        }
    }

    #[test]
    fn test_wire_shape() {
        let boards = compute_leaderboards(&[record("A", 1, 2, 3)]);
        let json = serde_json::to_value(&boards).unwrap();
        assert_eq!(json["easy"]["first"]["name"], "A");
        assert_eq!(json["easy"]["first"]["highScore"], 1);
        assert!(json["easy"]["second"].is_null());
        assert!(json["hard"]["third"].is_null());
    }
}
