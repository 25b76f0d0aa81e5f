//! Topic schedule parsing.
//!
//! `topics.txt` is a sequence of blank-line-separated blocks:
//!
//! ```text
//! Day 1
//! Topic: What is Bitcoin?
//! Additional Details: Cover mining and halving.
//! ```
//!
//! Invalid blocks are skipped with a warning rather than failing the run;
//! the schedule is maintained by hand and one typo must not stop publishing.

use std::path::Path;

use tracing::warn;

use crate::QueueError;

/// One scheduled topic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topic {
    /// Day number this topic is scheduled for.
    pub day: u32,
    /// Topic to write about.
    pub topic: String,
    /// Optional additional context.
    pub details: String,
}

/// The parsed topic schedule.
#[derive(Clone, Debug)]
pub struct TopicQueue {
    topics: Vec<Topic>,
}

impl TopicQueue {
    /// Load and parse the schedule from a file.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::TopicsNotFound`] when the file is missing and
    /// [`QueueError::NoTopics`] when nothing in it parses.
    pub fn load(path: &Path) -> Result<Self, QueueError> {
        if !path.exists() {
            return Err(QueueError::TopicsNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse schedule content.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::NoTopics`] when no block parses.
    pub fn parse(content: &str) -> Result<Self, QueueError> {
        let mut topics = Vec::new();

        for block in content.trim().split("\n\n") {
            let lines: Vec<&str> = block.trim().lines().collect();
            if lines.len() < 2 {
                continue;
            }
            let day_line = lines[0].trim();
            let Some(day_rest) = day_line.strip_prefix("Day") else {
                continue;
            };
            let Ok(day) = day_rest.trim().parse::<u32>() else {
                warn!("skipping invalid day line: {day_line}");
                continue;
            };

            let topic_line = lines[1].trim();
            let topic = topic_line
                .strip_prefix("Topic:")
                .unwrap_or(topic_line)
                .trim()
                .to_owned();
            if topic.is_empty() {
                warn!("empty topic for day {day}, skipping");
                continue;
            }

            let details = lines[2..]
                .iter()
                .find_map(|line| line.trim().strip_prefix("Additional Details:"))
                .map(|details| details.trim().to_owned())
                .unwrap_or_default();

            topics.push(Topic { day, topic, details });
        }

        if topics.is_empty() {
            return Err(QueueError::NoTopics);
        }
        Ok(Self { topics })
    }

    /// Topic scheduled for `next_day`.
    ///
    /// When `next_day` runs past the end of the schedule, the queue wraps
    /// around to the first topic so the automation never goes dark.
    #[must_use]
    pub fn next(&self, next_day: u32) -> Option<&Topic> {
        if let Some(topic) = self.topics.iter().find(|topic| topic.day == next_day) {
            return Some(topic);
        }
        let max_day = self.topics.iter().map(|topic| topic.day).max()?;
        if next_day > max_day {
            self.topics.first()
        } else {
            // A gap in the schedule, not the end of it.
            None
        }
    }

    /// Number of parsed topics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
