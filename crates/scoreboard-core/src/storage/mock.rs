//! Mock score store for testing
//!
//! Wraps a `MemoryStore` and lets tests inject read and write failures and
//! inspect every write attempt.

use std::cell::Cell;

use crate::error::{Error, Result};
use crate::storage::{MemoryStore, ScoreStore, SnapshotListener, UserScoreRecord, WatchId};

#[derive(Debug, Default)]
pub struct MockStore {
    inner: MemoryStore,
    write_failure: Option<(String, String)>,
    read_failure: Option<String>,
    writes: Vec<(String, UserScoreRecord)>,
    list_calls: Cell<usize>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents<I, K>(documents: I) -> Self
    where
        I: IntoIterator<Item = (K, UserScoreRecord)>,
        K: Into<String>,
    {
        Self {
            inner: MemoryStore::with_documents(documents),
            ..Self::default()
        }
    }

    /// Make every following write fail with the given provider code and message
    pub fn fail_writes(&mut self, code: &str, message: &str) {
        self.write_failure = Some((code.to_string(), message.to_string()));
    }

    /// Make every following collection read fail
    pub fn fail_reads(&mut self, message: &str) {
        self.read_failure = Some(message.to_string());
    }

    pub fn recover(&mut self) {
        self.write_failure = None;
        self.read_failure = None;
    }

    /// Every write attempt, including failed ones, in call order
    pub fn writes(&self) -> &[(String, UserScoreRecord)] {
        &self.writes
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    pub fn watcher_count(&self) -> usize {
        self.inner.watcher_count()
    }

    /// Write a document as if another client did it, bypassing failure injection
    pub fn external_write(&mut self, uid: &str, record: UserScoreRecord) {
        // MemoryStore writes cannot fail
        let _ = self.inner.set(uid, record);
    }
}

impl ScoreStore for MockStore {
    fn get(&self, uid: &str) -> Result<Option<UserScoreRecord>> {
        if let Some(message) = &self.read_failure {
            return Err(Error::StoreUnavailable(message.clone()));
        }
        self.inner.get(uid)
    }

    fn set(&mut self, uid: &str, record: UserScoreRecord) -> Result<()> {
        self.writes.push((uid.to_string(), record.clone()));
        if let Some((code, message)) = &self.write_failure {
            return Err(Error::persist(code.clone(), message.clone()));
        }
        self.inner.set(uid, record)
    }

    fn list(&self) -> Result<Vec<UserScoreRecord>> {
        self.list_calls.set(self.list_calls.get() + 1);
        if let Some(message) = &self.read_failure {
            return Err(Error::StoreUnavailable(message.clone()));
        }
        self.inner.list()
    }

    fn watch(&mut self, uid: &str, listener: SnapshotListener) -> Result<WatchId> {
        self.inner.watch(uid, listener)
    }

    fn unwatch(&mut self, id: WatchId) -> bool {
        self.inner.unwatch(id)
    }
}
