use crate::error::{DeskError, DeskResult};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Keyed JSON blobs on disk. Contents are opaque and unversioned.
#[derive(Debug)]
pub struct LocalStore {
    root: PathBuf,
    /// Serialises read-modify-write sequences such as recording a score
    pub(super) write_lock: Mutex<()>,
}

pub(super) fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Store rooted at `<app_data_dir>/store`
    pub fn in_app_data(app_data_dir: &Path) -> Self {
        Self::new(app_data_dir.join("store"))
    }

    fn path_for(&self, key: &str) -> DeskResult<PathBuf> {
        if !is_valid_key(key) {
            return Err(DeskError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    /// Read a blob. Missing or unreadable JSON yields None, like an empty localStorage slot.
    pub async fn read_blob(&self, key: &str) -> DeskResult<Option<Value>> {
        let path = self.path_for(key)?;

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(DeskError::io(&path, e)),
        };

        match serde_json::from_str(&content) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key, error = %e, "Ignoring corrupt store entry");
                Ok(None)
            }
        }
    }

    pub async fn write_blob(&self, key: &str, value: &Value) -> DeskResult<()> {
        let path = self.path_for(key)?;

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| DeskError::io(&self.root, e))?;

        // Stage then rename, readers only ever see a whole file
        let bytes = serde_json::to_vec(value)?;
        let staging = path.with_extension("json.tmp");
        tokio::fs::write(&staging, bytes)
            .await
            .map_err(|e| DeskError::io(&staging, e))?;
        tokio::fs::rename(&staging, &path)
            .await
            .map_err(|e| DeskError::io(&path, e))?;

        debug!(key, "Store entry written");
        Ok(())
    }

    /// Returns whether something was removed
    pub async fn remove_blob(&self, key: &str) -> DeskResult<bool> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DeskError::io(&path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::in_app_data(dir.path());

        let votes = json!({ "poll_001": "opt_3" });
        store.write_blob("corvid_poll_votes", &votes).await.unwrap();

        assert_eq!(store.read_blob("corvid_poll_votes").await.unwrap(), Some(votes));
        assert!(dir.path().join("store").join("corvid_poll_votes.json").exists());
    }

    #[tokio::test]
    async fn test_missing_key_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        assert_eq!(store.read_blob("gallery_page").await.unwrap(), None);
        assert!(!store.remove_blob("gallery_page").await.unwrap());
    }

    #[tokio::test]
    async fn test_corrupt_entry_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        std::fs::write(dir.path().join("gallery_page.json"), "{not json").unwrap();
        assert_eq!(store.read_blob("gallery_page").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_invalid_keys_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());

        for key in ["", "../escape", "a/b", "dot.ted"] {
            let err = store.write_blob(key, &json!(1)).await.unwrap_err();
            assert!(matches!(err, DeskError::InvalidKey(_)), "{}", key);
        }
    }

    #[tokio::test]
    async fn test_remove_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());

        store.write_blob("b_key", &json!([1, 2])).await.unwrap();
        assert!(store.remove_blob("b_key").await.unwrap());
        assert_eq!(store.read_blob("b_key").await.unwrap(), None);
        assert!(!store.remove_blob("b_key").await.unwrap());
    }

    #[tokio::test]
    async fn test_overwrite_replaces_whole_file_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());

        store.write_blob("best_scores", &json!({ "snake": 12, "tetris": 4000 })).await.unwrap();
        store.write_blob("best_scores", &json!({ "snake": 3 })).await.unwrap();

        assert_eq!(
            store.read_blob("best_scores").await.unwrap(),
            Some(json!({ "snake": 3 }))
        );

        let mut names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["best_scores.json"]);
    }
}
