//! Topic schedule, day-counter status, and image library.
//!
//! The publishing workflow is driven by a plain-text topic schedule
//! (`topics.txt`), a small JSON status record tracking the next day to
//! process, and a directory of pre-compressed featured images consumed one
//! per day. All three are deliberately simple file formats that survive
//! being hand-edited between runs.

mod media;
mod status;
mod topics;

use std::path::PathBuf;

pub use media::MediaLibrary;
pub use status::{Status, StatusStore};
pub use topics::{Topic, TopicQueue};

/// Error from queue operations.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    /// Topics file does not exist.
    #[error("topics file not found: {}", .0.display())]
    TopicsNotFound(PathBuf),

    /// Topics file contained no valid topic blocks.
    #[error("no valid topics found")]
    NoTopics,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Status file JSON error.
    #[error("status file error: {0}")]
    Status(#[from] serde_json::Error),
}

/// Label for a given day, rotating through the configured list.
#[must_use]
pub fn rotate_label(labels: &[String], day: u32) -> Option<&str> {
    if labels.is_empty() {
        return None;
    }
    let index = (day as usize) % labels.len();
    Some(&labels[index])
}
