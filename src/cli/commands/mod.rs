//! Command implementations for studyflow.
//!
//! Each command returns the text to print; `main` does the printing.

mod completions;
mod config;
mod music;
mod progress;
mod timer;

pub use completions::{completion_install_instructions, completions, generate_completions};
pub use config::config;
pub use music::music;
pub use progress::{history, log_session, stats};
pub use timer::{session_config, start};

use crate::config::Config;
use crate::error::StudyError;
use crate::features::progress::{ProgressRecorder, SqliteProgressStore};
use crate::features::quotes::random_quote;
use crate::output::{format_quote, OutputFormat};

/// Open the progress store at the default location.
///
/// # Errors
///
/// Returns an error if the database cannot be opened.
pub fn open_recorder(config: &Config) -> Result<ProgressRecorder<SqliteProgressStore>, StudyError> {
    let store = SqliteProgressStore::new()?;
    Ok(ProgressRecorder::new(store).with_max_retries(config.sync.max_retries))
}

/// Execute quote command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn quote(format: OutputFormat) -> Result<String, StudyError> {
    let quote = random_quote(&mut rand::thread_rng());
    format_quote(&quote, format)
}
