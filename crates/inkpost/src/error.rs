//! CLI error types.

use inkpost_blogger::BloggerError;
use inkpost_config::ConfigError;
use inkpost_gemini::GeminiError;
use inkpost_queue::QueueError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Gemini(#[from] GeminiError),

    #[error("{0}")]
    Blogger(#[from] BloggerError),

    #[error("{0}")]
    Queue(#[from] QueueError),

    #[error("{0}")]
    Validation(String),
}
