//! CLI command implementations.

pub mod leaderboard;
pub mod serve;
pub mod show;
pub mod submit;
