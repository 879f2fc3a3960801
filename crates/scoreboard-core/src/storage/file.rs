use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::config::store::USERS_COLLECTION;
use crate::error::Result;
use crate::storage::{MemoryStore, ScoreStore, SnapshotListener, UserScoreRecord, WatchId};

/// On-disk layout of the collection file
#[derive(Debug, Serialize, Deserialize)]
struct CollectionFile {
    collection: String,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    documents: BTreeMap<String, UserScoreRecord>,
}

/// Score store persisted to a single JSON file shared between processes.
///
/// `set` re-reads the file, replaces only its own document and swaps the new
/// file into place, so documents written by other processes are kept.
/// `refresh` re-reads the file so writes and removals by other processes
/// reach local watchers.
///
/// Two processes writing at the same instant can still lose one of the
/// writes; there is no file locking.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl FileStore {
    /// Open the collection file, starting empty if it does not exist yet
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let documents = Self::read_documents(&path)?.unwrap_or_default();
        info!("Opened score store {:?} ({} documents)", path, documents.len());

        Ok(Self {
            path,
            inner: MemoryStore::with_documents(documents),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn read_documents(path: &Path) -> Result<Option<BTreeMap<String, UserScoreRecord>>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Some(BTreeMap::new()));
        }
        let file: CollectionFile = serde_json::from_str(&content)?;
        Ok(Some(file.documents))
    }

    /// Write the collection to a temporary file next to the store and rename
    /// it over the store, so readers never see a partial file.
    fn write_documents(&self, documents: BTreeMap<String, UserScoreRecord>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let file = CollectionFile {
            collection: USERS_COLLECTION.to_string(),
            updated_at: Utc::now(),
            documents,
        };

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(serde_json::to_string_pretty(&file)?.as_bytes())?;
        temp.flush()?;
        temp.persist(&self.path).map_err(io::Error::from)?;
        Ok(())
    }
}

impl ScoreStore for FileStore {
    fn get(&self, uid: &str) -> Result<Option<UserScoreRecord>> {
        self.inner.get(uid)
    }

    fn set(&mut self, uid: &str, record: UserScoreRecord) -> Result<()> {
        let mut documents = Self::read_documents(&self.path)?.unwrap_or_default();
        documents.insert(uid.to_string(), record);
        self.write_documents(documents.clone())?;
        debug!("Wrote document {} to {:?}", uid, self.path);

        self.inner.replace_documents(documents);
        Ok(())
    }

    fn list(&self) -> Result<Vec<UserScoreRecord>> {
        self.inner.list()
    }

    fn watch(&mut self, uid: &str, listener: SnapshotListener) -> Result<WatchId> {
        self.inner.watch(uid, listener)
    }

    fn unwatch(&mut self, id: WatchId) -> bool {
        self.inner.unwatch(id)
    }

    fn refresh(&mut self) -> Result<()> {
        // A missing file is an empty collection, as in `open`
        let documents = Self::read_documents(&self.path)?.unwrap_or_default();
        let changed = self.inner.replace_documents(documents);
        if changed > 0 {
            debug!("{} documents changed on disk", changed);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::HighScores;
    use std::sync::mpsc;
    use tempfile::TempDir;

    fn create_temp_store() -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path().join("users.json")).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let (store, _temp) = create_temp_store();
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_persists_across_reopen() {
        let (mut store, _temp) = create_temp_store();
        store
            .set("u1", UserScoreRecord::new("Ana", HighScores::new(10, 5, 1)))
            .unwrap();

        let reopened = FileStore::open(store.path()).unwrap();
        let record = reopened.get("u1").unwrap().unwrap();
        assert_eq!(record.display_name(), Some("Ana"));
        assert_eq!(record.high_scores(), HighScores::new(10, 5, 1));
    }

    #[test]
    fn test_file_layout() {
        let (mut store, _temp) = create_temp_store();
        store
            .set("u1", UserScoreRecord::new("Ana", HighScores::new(1, 2, 3)))
            .unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["collection"], "users");
        assert!(json["updated_at"].is_string());
        assert_eq!(json["documents"]["u1"]["high_score_hard"], 3);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(FileStore::open(&path).is_err());
    }

    #[test]
    fn test_refresh_notifies_on_external_write() {
        let (mut store, _temp) = create_temp_store();
        store
            .set("u1", UserScoreRecord::new("Ana", HighScores::new(1, 0, 0)))
            .unwrap();

        let (tx, rx) = mpsc::channel();
        store
            .watch(
                "u1",
                Box::new(move |snapshot| {
                    let _ = tx.send(snapshot);
                }),
            )
            .unwrap();
        rx.try_recv().unwrap();

        // Another process overwrites the document
        let mut other = FileStore::open(store.path()).unwrap();
        other
            .set("u1", UserScoreRecord::new("Ana", HighScores::new(9, 0, 0)))
            .unwrap();

        store.refresh().unwrap();
        let snapshot = rx.try_recv().unwrap();
        assert_eq!(
            snapshot.record.unwrap().high_scores(),
            HighScores::new(9, 0, 0)
        );

        // Nothing changed since
        store.refresh().unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_write_keeps_documents_of_other_writers() {
        let (mut store, _temp) = create_temp_store();
        let mut other = FileStore::open(store.path()).unwrap();

        other
            .set("bob", UserScoreRecord::new("Bob", HighScores::new(99, 99, 99)))
            .unwrap();
        store
            .set("ana", UserScoreRecord::new("Ana", HighScores::new(1, 1, 1)))
            .unwrap();

        let reopened = FileStore::open(store.path()).unwrap();
        assert_eq!(
            reopened.get("bob").unwrap().unwrap().high_scores(),
            HighScores::new(99, 99, 99)
        );
        assert_eq!(
            reopened.get("ana").unwrap().unwrap().high_scores(),
            HighScores::new(1, 1, 1)
        );

        // The writer also picked up the other document
        assert_eq!(store.len(), 2);
        assert!(store.get("bob").unwrap().is_some());
    }

    #[test]
    fn test_write_leaves_no_temp_files() {
        let (mut store, temp) = create_temp_store();
        store
            .set("u1", UserScoreRecord::new("Ana", HighScores::new(1, 2, 3)))
            .unwrap();
        store
            .set("u1", UserScoreRecord::new("Ana", HighScores::new(4, 5, 6)))
            .unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("users.json")]);
    }

    #[test]
    fn test_refresh_drops_removed_documents() {
        let (mut store, _temp) = create_temp_store();
        store
            .set("u1", UserScoreRecord::new("Ana", HighScores::new(1, 0, 0)))
            .unwrap();
        store
            .set("u2", UserScoreRecord::new("Bob", HighScores::new(2, 0, 0)))
            .unwrap();

        let (tx, rx) = mpsc::channel();
        store
            .watch(
                "u2",
                Box::new(move |snapshot| {
                    let _ = tx.send(snapshot);
                }),
            )
            .unwrap();
        rx.try_recv().unwrap();

        // Another process rewrites the file without u2
        let content = fs::read_to_string(store.path()).unwrap();
        let mut json: serde_json::Value = serde_json::from_str(&content).unwrap();
        json["documents"].as_object_mut().unwrap().remove("u2");
        fs::write(store.path(), json.to_string()).unwrap();

        store.refresh().unwrap();
        assert!(store.get("u2").unwrap().is_none());
        assert_eq!(store.list().unwrap().len(), 1);

        let snapshot = rx.try_recv().unwrap();
        assert_eq!(snapshot.uid, "u2");
        assert_eq!(snapshot.record, None);
    }

    #[test]
    fn test_failed_write_leaves_memory_untouched() {
        let temp_dir = TempDir::new().unwrap();
        // A directory in place of the file makes the write fail
        let path = temp_dir.path().join("users.json");
        fs::create_dir_all(&path).unwrap();
        let mut store = FileStore {
            path,
            inner: MemoryStore::new(),
        };

        let result = store.set("u1", UserScoreRecord::new("Ana", HighScores::default()));
        assert!(result.is_err());
        assert!(store.get("u1").unwrap().is_none());
    }
}
