//! Output formatting for studyflow.
//!
//! Every command result can be printed as colored text or as JSON.

mod json;
mod pretty;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::StudyError;
use crate::features::music::MusicPlayer;
use crate::features::progress::SessionRecord;
use crate::features::quotes::Quote;
use crate::features::stats::Dashboard;

pub use json::*;
pub use pretty::*;

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

/// Format the stats dashboard based on output format
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn format_dashboard(
    dashboard: &Dashboard,
    sparkline: &str,
    format: OutputFormat,
) -> Result<String, StudyError> {
    match format {
        OutputFormat::Pretty => Ok(format_dashboard_pretty(dashboard, sparkline)),
        OutputFormat::Json => to_json(dashboard),
    }
}

/// Format the session log based on output format
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn format_history(records: &[SessionRecord], format: OutputFormat) -> Result<String, StudyError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(records)),
        OutputFormat::Json => format_history_json(records),
    }
}

/// Format a quote based on output format
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn format_quote(quote: &Quote, format: OutputFormat) -> Result<String, StudyError> {
    match format {
        OutputFormat::Pretty => Ok(format_quote_pretty(quote)),
        OutputFormat::Json => to_json(quote),
    }
}

/// Format the music catalog and current selection based on output format
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn format_music(player: &MusicPlayer, format: OutputFormat) -> Result<String, StudyError> {
    match format {
        OutputFormat::Pretty => Ok(format_music_pretty(player)),
        OutputFormat::Json => format_music_json(player),
    }
}

/// Format the configuration based on output format
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_config(config: &Config, format: OutputFormat) -> Result<String, StudyError> {
    match format {
        OutputFormat::Pretty => Ok(serde_yaml::to_string(config)?),
        OutputFormat::Json => to_json(config),
    }
}
