//! Score store abstraction.
//!
//! The store is the external document database: it owns durability and
//! querying, and pushes snapshots of watched documents through listener
//! callbacks.

use crate::error::Result;
use crate::storage::{RecordSnapshot, UserScoreRecord};

/// Callback invoked with each snapshot of a watched document.
pub type SnapshotListener = Box<dyn FnMut(RecordSnapshot) + Send>;

/// Handle returned by [`ScoreStore::watch`], used to cancel the watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(pub(crate) u64);

/// Document store holding one `UserScoreRecord` per user id.
pub trait ScoreStore {
    /// Read one document.
    fn get(&self, uid: &str) -> Result<Option<UserScoreRecord>>;

    /// Overwrite (or create) the whole document for `uid`.
    fn set(&mut self, uid: &str, record: UserScoreRecord) -> Result<()>;

    /// Read every document in the collection, ordered by user id.
    fn list(&self) -> Result<Vec<UserScoreRecord>>;

    /// Watch one document.
    ///
    /// The listener receives the current snapshot immediately, then one
    /// snapshot per change to the document.
    fn watch(&mut self, uid: &str, listener: SnapshotListener) -> Result<WatchId>;

    /// Cancel a watch. Returns false if the watch was not registered.
    fn unwatch(&mut self, id: WatchId) -> bool;

    /// Pick up changes made by other writers, notifying watchers.
    ///
    /// Stores that observe every write directly have nothing to do here.
    fn refresh(&mut self) -> Result<()> {
        Ok(())
    }
}
