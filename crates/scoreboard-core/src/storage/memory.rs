use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::storage::{RecordSnapshot, ScoreStore, SnapshotListener, UserScoreRecord, WatchId};

struct Watcher {
    id: WatchId,
    uid: String,
    listener: SnapshotListener,
}

/// In-process score store
#[derive(Default)]
pub struct MemoryStore {
    documents: BTreeMap<String, UserScoreRecord>,
    watchers: Vec<Watcher>,
    next_watch_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents<I, K>(documents: I) -> Self
    where
        I: IntoIterator<Item = (K, UserScoreRecord)>,
        K: Into<String>,
    {
        Self {
            documents: documents
                .into_iter()
                .map(|(uid, record)| (uid.into(), record))
                .collect(),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn watcher_count(&self) -> usize {
        self.watchers.len()
    }

    /// Replace every document with `documents`.
    ///
    /// Watchers are notified for each document that was added, changed or
    /// removed. Returns the number of such documents.
    pub fn replace_documents(&mut self, documents: BTreeMap<String, UserScoreRecord>) -> usize {
        let changed: Vec<String> = documents
            .iter()
            .filter(|(uid, record)| self.documents.get(*uid) != Some(*record))
            .map(|(uid, _)| uid.clone())
            .chain(
                self.documents
                    .keys()
                    .filter(|uid| !documents.contains_key(*uid))
                    .cloned(),
            )
            .collect();

        self.documents = documents;
        for uid in &changed {
            self.notify(uid);
        }
        changed.len()
    }

    fn snapshot(&self, uid: &str) -> RecordSnapshot {
        RecordSnapshot {
            uid: uid.to_string(),
            record: self.documents.get(uid).cloned(),
        }
    }

    fn notify(&mut self, uid: &str) {
        let snapshot = self.snapshot(uid);
        for watcher in self.watchers.iter_mut().filter(|w| w.uid == uid) {
            debug!("Notifying watch {:?} of change to {}", watcher.id, uid);
            (watcher.listener)(snapshot.clone());
        }
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("documents", &self.documents)
            .field("watchers", &self.watchers.len())
            .finish()
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, uid: &str) -> Result<Option<UserScoreRecord>> {
        Ok(self.documents.get(uid).cloned())
    }

    fn set(&mut self, uid: &str, record: UserScoreRecord) -> Result<()> {
        let changed = self.documents.get(uid) != Some(&record);
        self.documents.insert(uid.to_string(), record);
        if changed {
            self.notify(uid);
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<UserScoreRecord>> {
        Ok(self.documents.values().cloned().collect())
    }

    fn watch(&mut self, uid: &str, mut listener: SnapshotListener) -> Result<WatchId> {
        let id = WatchId(self.next_watch_id);
        self.next_watch_id += 1;

        listener(self.snapshot(uid));
        self.watchers.push(Watcher {
            id,
            uid: uid.to_string(),
            listener,
        });
        Ok(id)
    }

    fn unwatch(&mut self, id: WatchId) -> bool {
        let before = self.watchers.len();
        self.watchers.retain(|w| w.id != id);
        self.watchers.len() != before
    }
}
