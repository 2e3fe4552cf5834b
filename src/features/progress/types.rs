//! Profile, daily stat and session log records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::features::timer::Phase;

/// Durable per-user summary counters.
///
/// Invariant: `longest_streak >= current_streak`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Owner of the profile
    pub user_id: String,
    /// Completed focus sessions, all time
    pub total_sessions: u32,
    /// Focused minutes, all time
    pub total_minutes: u64,
    /// Current streak
    pub current_streak: u32,
    /// Best streak ever reached
    pub longest_streak: u32,
    /// Last calendar day with activity
    pub last_active_date: Option<NaiveDate>,
    /// Store-managed write counter used to detect concurrent updates
    #[serde(default, skip_serializing)]
    pub revision: u64,
}

impl Profile {
    /// A fresh profile with every counter at zero.
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            total_sessions: 0,
            total_minutes: 0,
            current_streak: 0,
            longest_streak: 0,
            last_active_date: None,
            revision: 0,
        }
    }
}

/// Per-user, per-day aggregate of completed focus sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStat {
    pub user_id: String,
    pub date: NaiveDate,
    pub sessions_count: u32,
    pub total_minutes: u64,
}

/// Increment applied to a [`DailyStat`] at the storage boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStatDelta {
    pub sessions_count: u32,
    pub total_minutes: u64,
}

impl DailyStatDelta {
    /// The increment contributed by one completed session.
    #[must_use]
    pub const fn for_session(minutes: u32) -> Self {
        Self {
            sessions_count: 1,
            total_minutes: minutes as u64,
        }
    }
}

/// Append-only log entry for a completed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub duration_minutes: u32,
    #[serde(rename = "type")]
    pub kind: Phase,
    pub timestamp: DateTime<Utc>,
}

impl SessionRecord {
    /// A log entry for a completed focus session.
    #[must_use]
    pub const fn focus(duration_minutes: u32, timestamp: DateTime<Utc>) -> Self {
        Self {
            duration_minutes,
            kind: Phase::Focus,
            timestamp,
        }
    }
}

/// Everything that changes when one focus session completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOutcome {
    pub profile: Profile,
    pub daily_stat: DailyStat,
    pub record: SessionRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_json_is_camel_case_without_revision() {
        let profile = Profile {
            total_sessions: 2,
            revision: 7,
            ..Profile::new("u1")
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["userId"], "u1");
        assert_eq!(value["totalSessions"], 2);
        assert!(value.get("currentStreak").is_some());
        assert!(value.get("revision").is_none());
        assert!(value.get("total_sessions").is_none());

        let ts = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
        let value = serde_json::to_value(SessionRecord::focus(25, ts)).unwrap();
        assert_eq!(value["durationMinutes"], 25);
        assert_eq!(value["type"], "focus");
    }
}
