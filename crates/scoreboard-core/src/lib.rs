pub mod auth;
pub mod bridge;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod policy;
pub mod ports;
pub mod score;
pub mod session;
pub mod storage;

pub use auth::{AuthProvider, AuthUser, LocalAuthProvider, MockAuthProvider};
pub use bridge::{BridgeEvent, ScoreBridge};
pub use config::Config;
pub use error::{Error, Result};
pub use leaderboard::{LeaderboardEntry, Leaderboards, Podium, compute_leaderboards, rank_tier};
pub use policy::{HighScoreSubmission, PersistOutcome, persist_high_score, should_persist};
pub use ports::{Inbound, Outbound, PortError, SignInInfo, decode_inbound, encode_outbound};
pub use score::{HighScores, Tier};
pub use session::ScoreSession;
pub use storage::{FileStore, MemoryStore, MockStore, RecordSnapshot, ScoreStore, UserScoreRecord};
