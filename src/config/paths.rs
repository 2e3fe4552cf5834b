//! Path resolution for studyflow configuration and data files.
//!
//! All studyflow data is stored in `~/.studyflow/` unless `STUDYFLOW_HOME`
//! points somewhere else:
//! - `config.yaml` - Main configuration file
//! - `studyflow.db` - SQLite database for profiles, daily stats, sessions
//! - `studyflow.log` - Diagnostic log

use std::path::PathBuf;

use crate::error::StudyError;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "STUDYFLOW_HOME";

/// Paths to studyflow configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.studyflow/`
    pub root: PathBuf,
    /// Config file: `~/.studyflow/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.studyflow/studyflow.db`
    pub database: PathBuf,
    /// Log file: `~/.studyflow/studyflow.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Resolve paths from `STUDYFLOW_HOME`, falling back to the home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, StudyError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            StudyError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".studyflow")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("studyflow.db"),
            log_file: root.join("studyflow.log"),
            root,
        }
    }

    /// Ensure the data directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), StudyError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                StudyError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}
