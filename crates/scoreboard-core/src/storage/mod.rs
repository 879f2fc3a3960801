//! Score storage.
//!
//! - `UserScoreRecord` - one user's stored document
//! - `ScoreStore` - the document store seam
//! - `MemoryStore`, `FileStore` - store implementations
//! - `MockStore` - failure-injecting store for tests

mod file;
mod memory;
pub mod mock;
mod record;
mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use mock::MockStore;
pub use record::{RecordSnapshot, UserScoreRecord};
pub use store::{ScoreStore, SnapshotListener, WatchId};
