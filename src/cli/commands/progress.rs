//! Progress commands: dashboard, history and manual logging.

use chrono::{NaiveDate, Utc};
use colored::Colorize;
use serde_json::json;

use super::open_recorder;
use crate::config::Config;
use crate::core::local_today;
use crate::error::StudyError;
use crate::features::progress::{ProgressRecorder, SqliteProgressStore};
use crate::features::stats::{render_sparkline, Dashboard};
use crate::features::timer::{format_minutes, validate_focus_minutes};
use crate::output::{format_dashboard, format_history, to_json, OutputFormat};
use crate::storage::ProgressStore;

/// Execute stats command
///
/// # Errors
///
/// Returns an error if the database cannot be read or output formatting fails.
pub fn stats(config: &Config, format: OutputFormat) -> Result<String, StudyError> {
    let recorder = open_recorder(config)?;
    render_stats(&recorder, &config.general.user, local_today(), format)
}

fn render_stats(
    recorder: &ProgressRecorder<SqliteProgressStore>,
    user: &str,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, StudyError> {
    let profile = recorder.load_profile(user)?;
    let daily = recorder
        .store()
        .daily_stats_since(user, Dashboard::trend_start(today))?;

    let dashboard = Dashboard::build(&profile, &daily, today);
    let sparkline = render_sparkline(&dashboard.minutes_by_day(today));
    format_dashboard(&dashboard, &sparkline, format)
}

/// Execute history command
///
/// # Errors
///
/// Returns an error if the database cannot be read or output formatting fails.
pub fn history(config: &Config, limit: usize, format: OutputFormat) -> Result<String, StudyError> {
    let recorder = open_recorder(config)?;
    let records = recorder
        .store()
        .recent_sessions(&config.general.user, limit)?;
    format_history(&records, format)
}

/// Execute log command: record a focus session finished elsewhere.
///
/// # Errors
///
/// Returns an error if the length is out of range or the write fails.
pub fn log_session(config: &Config, minutes: u32, format: OutputFormat) -> Result<String, StudyError> {
    let minutes = validate_focus_minutes(minutes)?;
    let mut recorder = open_recorder(config)?;
    let user = &config.general.user;
    let today = local_today();

    recorder.activate(user, today)?;
    let outcome = recorder.record_focus_session(user, minutes, today, Utc::now())?;

    match format {
        OutputFormat::Json => to_json(&json!({
            "recorded": outcome.record,
            "profile": outcome.profile,
            "today": outcome.daily_stat,
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} Recorded {} focus session\n  Today: {} sessions, {}\n  Streak: {}",
            "✓".green(),
            format_minutes(u64::from(minutes)),
            outcome.daily_stat.sessions_count,
            format_minutes(outcome.daily_stat.total_minutes),
            outcome.profile.current_streak.to_string().yellow()
        )),
    }
}
