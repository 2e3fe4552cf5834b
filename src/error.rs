//! Error types for studyflow.

use thiserror::Error;

use crate::features::progress::{DailyStat, SessionRecord};

/// Errors produced by the timer, the progress tracker and their collaborators.
#[derive(Debug, Error)]
pub enum StudyError {
    /// SQLite or other storage failure.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration could not be read, parsed or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A requested record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A duration outside the accepted range was rejected.
    #[error("Invalid {field}: {value} (must be between {min} and {max} minutes)")]
    InvalidDuration {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// The store saw a concurrent write and refused a stale update.
    #[error("Write conflict: {0}")]
    Conflict(String),

    /// Conflicting writes kept winning until the retry budget ran out.
    #[error("Gave up after {attempts} conflicting write attempts")]
    RetriesExhausted { attempts: u32 },

    /// The session log and daily stat were written but the profile was not.
    ///
    /// Nothing is rolled back: `daily_stat` is what the store now holds.
    #[error("Session stats saved, but the profile update failed: {source}")]
    ProfileNotUpdated {
        daily_stat: Box<DailyStat>,
        record: Box<SessionRecord>,
        #[source]
        source: Box<StudyError>,
    },

    /// User input that could not be accepted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl StudyError {
    /// Whether retrying the same operation with fresh data may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

impl From<rusqlite::Error> for StudyError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.to_string())
    }
}
