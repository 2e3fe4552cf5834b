//! Persistence interface for progress data.
//!
//! The recorder only talks to this trait, so the SQLite store can be
//! swapped for a remote backend or a mock in tests.

use chrono::NaiveDate;

use crate::error::StudyError;
use crate::features::progress::{DailyStat, DailyStatDelta, Profile, SessionRecord};

/// Read/update/insert operations on profiles, daily stats and the session log.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressStore {
    /// Fetch a user's profile.
    fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, StudyError>;

    /// Create a zeroed profile, or return the existing one.
    fn create_profile(&self, user_id: &str) -> Result<Profile, StudyError>;

    /// Write a profile if nobody else wrote it since it was read.
    ///
    /// Fails with `StudyError::Conflict` when `profile.revision` is stale.
    /// Returns the stored profile with its new revision.
    fn update_profile(&self, user_id: &str, profile: &Profile) -> Result<Profile, StudyError>;

    /// Fetch the stat for one day.
    fn get_daily_stat(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<DailyStat>, StudyError>;

    /// Atomically add `delta` to a day's stat, creating it if needed.
    ///
    /// Returns the stat after the increment.
    fn upsert_daily_stat(
        &self,
        user_id: &str,
        date: NaiveDate,
        delta: DailyStatDelta,
    ) -> Result<DailyStat, StudyError>;

    /// Append to the session log.
    fn append_session_record(
        &self,
        user_id: &str,
        record: &SessionRecord,
    ) -> Result<(), StudyError>;

    /// Daily stats on or after `since`, oldest first.
    fn daily_stats_since(
        &self,
        user_id: &str,
        since: NaiveDate,
    ) -> Result<Vec<DailyStat>, StudyError>;

    /// Most recent session log entries, newest first.
    fn recent_sessions(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<SessionRecord>, StudyError>;
}
