//! SQLite-backed progress store.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, OptionalExtension, Row};

use super::types::{DailyStat, DailyStatDelta, Profile, SessionRecord};
use crate::error::StudyError;
use crate::features::timer::Phase;
use crate::storage::{Database, ProgressStore};

const DATE_FORMAT: &str = "%Y-%m-%d";

const PROFILE_COLUMNS: &str = "user_id, total_sessions, total_minutes, current_streak, \
                               longest_streak, last_active, revision";

/// Progress data kept in the local database.
pub struct SqliteProgressStore {
    db: Database,
}

impl SqliteProgressStore {
    /// Open the store on the default database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, StudyError> {
        Ok(Self {
            db: Database::open()?,
        })
    }

    /// Create a store with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }
}

impl ProgressStore for SqliteProgressStore {
    fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, StudyError> {
        self.db
            .connection()
            .query_row(
                &format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = ?1"),
                [user_id],
                row_to_profile,
            )
            .optional()
            .map_err(|e| StudyError::Database(format!("Failed to query profile: {e}")))
    }

    fn create_profile(&self, user_id: &str) -> Result<Profile, StudyError> {
        self.db
            .connection()
            .execute(
                "INSERT OR IGNORE INTO profiles (user_id) VALUES (?1)",
                [user_id],
            )
            .map_err(|e| StudyError::Database(format!("Failed to create profile: {e}")))?;

        self.get_profile(user_id)?
            .ok_or_else(|| StudyError::NotFound(format!("profile for {user_id}")))
    }

    fn update_profile(&self, user_id: &str, profile: &Profile) -> Result<Profile, StudyError> {
        let rows = self
            .db
            .connection()
            .execute(
                r"UPDATE profiles SET
                  total_sessions = ?2,
                  total_minutes = ?3,
                  current_streak = ?4,
                  longest_streak = ?5,
                  last_active = ?6,
                  revision = revision + 1
                  WHERE user_id = ?1 AND revision = ?7",
                params![
                    user_id,
                    profile.total_sessions,
                    profile.total_minutes,
                    profile.current_streak,
                    profile.longest_streak,
                    profile.last_active_date.map(format_date),
                    profile.revision,
                ],
            )
            .map_err(|e| StudyError::Database(format!("Failed to update profile: {e}")))?;

        if rows == 0 {
            return match self.get_profile(user_id)? {
                Some(stored) => Err(StudyError::Conflict(format!(
                    "profile {user_id} is at revision {}, update was based on {}",
                    stored.revision, profile.revision
                ))),
                None => Err(StudyError::NotFound(format!("profile for {user_id}"))),
            };
        }

        Ok(Profile {
            user_id: user_id.to_string(),
            revision: profile.revision + 1,
            ..profile.clone()
        })
    }

    fn get_daily_stat(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<DailyStat>, StudyError> {
        self.db
            .connection()
            .query_row(
                r"SELECT user_id, date, sessions_count, total_minutes
                  FROM daily_stats WHERE user_id = ?1 AND date = ?2",
                params![user_id, format_date(date)],
                row_to_daily_stat,
            )
            .optional()
            .map_err(|e| StudyError::Database(format!("Failed to query daily stat: {e}")))
    }

    fn upsert_daily_stat(
        &self,
        user_id: &str,
        date: NaiveDate,
        delta: DailyStatDelta,
    ) -> Result<DailyStat, StudyError> {
        self.db
            .connection()
            .query_row(
                r"INSERT INTO daily_stats (user_id, date, sessions_count, total_minutes)
                  VALUES (?1, ?2, ?3, ?4)
                  ON CONFLICT(user_id, date) DO UPDATE SET
                    sessions_count = sessions_count + excluded.sessions_count,
                    total_minutes = total_minutes + excluded.total_minutes
                  RETURNING user_id, date, sessions_count, total_minutes",
                params![
                    user_id,
                    format_date(date),
                    delta.sessions_count,
                    delta.total_minutes
                ],
                row_to_daily_stat,
            )
            .map_err(|e| StudyError::Database(format!("Failed to upsert daily stat: {e}")))
    }

    fn append_session_record(
        &self,
        user_id: &str,
        record: &SessionRecord,
    ) -> Result<(), StudyError> {
        self.db
            .connection()
            .execute(
                r"INSERT INTO sessions (user_id, duration_minutes, session_type, created_at)
                  VALUES (?1, ?2, ?3, ?4)",
                params![
                    user_id,
                    record.duration_minutes,
                    phase_to_string(record.kind),
                    record.timestamp.to_rfc3339(),
                ],
            )
            .map_err(|e| StudyError::Database(format!("Failed to append session: {e}")))?;

        Ok(())
    }

    fn daily_stats_since(
        &self,
        user_id: &str,
        since: NaiveDate,
    ) -> Result<Vec<DailyStat>, StudyError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT user_id, date, sessions_count, total_minutes
                  FROM daily_stats
                  WHERE user_id = ?1 AND date >= ?2
                  ORDER BY date ASC",
            )
            .map_err(|e| StudyError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(params![user_id, format_date(since)], row_to_daily_stat)
            .map_err(|e| StudyError::Database(format!("Failed to query daily stats: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| StudyError::Database(e.to_string()))
    }

    fn recent_sessions(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<SessionRecord>, StudyError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT duration_minutes, session_type, created_at
                  FROM sessions
                  WHERE user_id = ?1
                  ORDER BY created_at DESC, id DESC
                  LIMIT ?2",
            )
            .map_err(|e| StudyError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(params![user_id, limit], row_to_session)
            .map_err(|e| StudyError::Database(format!("Failed to query sessions: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| StudyError::Database(e.to_string()))
    }
}

fn row_to_profile(row: &Row<'_>) -> Result<Profile, rusqlite::Error> {
    let last_active: Option<String> = row.get(5)?;

    Ok(Profile {
        user_id: row.get(0)?,
        total_sessions: row.get(1)?,
        total_minutes: row.get(2)?,
        current_streak: row.get(3)?,
        longest_streak: row.get(4)?,
        last_active_date: last_active.map(|s| parse_date(5, &s)).transpose()?,
        revision: row.get(6)?,
    })
}

fn row_to_daily_stat(row: &Row<'_>) -> Result<DailyStat, rusqlite::Error> {
    let date: String = row.get(1)?;

    Ok(DailyStat {
        user_id: row.get(0)?,
        date: parse_date(1, &date)?,
        sessions_count: row.get(2)?,
        total_minutes: row.get(3)?,
    })
}

fn row_to_session(row: &Row<'_>) -> Result<SessionRecord, rusqlite::Error> {
    let kind: String = row.get(1)?;
    let created_at: String = row.get(2)?;

    let timestamp = DateTime::parse_from_rfc3339(&created_at)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| conversion_error(2, e))?;

    Ok(SessionRecord {
        duration_minutes: row.get(0)?,
        kind: string_to_phase(&kind),
        timestamp,
    })
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_date(column: usize, s: &str) -> Result<NaiveDate, rusqlite::Error> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| conversion_error(column, e))
}

fn conversion_error(
    column: usize,
    e: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
}

const fn phase_to_string(phase: Phase) -> &'static str {
    match phase {
        Phase::Focus => "focus",
        Phase::Break => "break",
    }
}

fn string_to_phase(s: &str) -> Phase {
    match s {
        "break" => Phase::Break,
        _ => Phase::Focus,
    }
}
