//! Day-counter status record.
//!
//! A small JSON file tracks where the automation is in the schedule. Saves
//! go through a temp file in the same directory followed by an atomic
//! rename, so a crash mid-write can never leave a truncated status behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::QueueError;

/// Persistent automation state.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct Status {
    /// Next day number to process.
    pub next_day: u32,
    /// Topic of the most recently published post.
    pub last_processed: String,
    /// Unix timestamp (seconds) of the last successful publish.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_published: Option<u64>,
    /// Where the last featured image came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_image_source: Option<String>,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            next_day: 1,
            last_processed: String::new(),
            last_published: None,
            last_image_source: None,
        }
    }
}

/// Load/save access to the status file.
#[derive(Clone, Debug)]
pub struct StatusStore {
    path: PathBuf,
}

impl StatusStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the status, or the default (`next_day = 1`) when no file exists.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Status`] when the file exists but is not valid
    /// JSON.
    pub fn load(&self) -> Result<Status, QueueError> {
        if !self.path.exists() {
            return Ok(Status::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save the status via write-to-temp-then-atomic-rename.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the temp file cannot be written or renamed
    /// over the destination.
    pub fn save(&self, status: &Status) -> Result<(), QueueError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut file, status)?;
        file.write_all(b"\n")?;
        file.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = StatusStore::new(dir.path().join("status.json"));
        let status = store.load().unwrap();
        assert_eq!(status.next_day, 1);
        assert_eq!(status.last_processed, "");
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = StatusStore::new(dir.path().join("status.json"));
        let status = Status {
            next_day: 8,
            last_processed: "What is Ethereum?".to_owned(),
            last_published: Some(1_700_000_000),
            last_image_source: Some("images".to_owned()),
        };
        store.save(&status).unwrap();
        assert_eq!(store.load().unwrap(), status);
    }

    #[test]
    fn test_save_overwrites_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("status.json");
        let store = StatusStore::new(&path);
        store.save(&Status::default()).unwrap();
        store
            .save(&Status {
                next_day: 2,
                ..Status::default()
            })
            .unwrap();
        assert_eq!(store.load().unwrap().next_day, 2);
        // No temp files left behind.
        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_corrupt_status_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("status.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = StatusStore::new(&path).load().unwrap_err();
        assert!(matches!(err, QueueError::Status(_)));
    }

    #[test]
    fn test_partial_file_fields_get_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("status.json");
        std::fs::write(&path, r#"{"next_day": 5}"#).unwrap();
        let status = StatusStore::new(&path).load().unwrap();
        assert_eq!(status.next_day, 5);
        assert_eq!(status.last_published, None);
    }
}
