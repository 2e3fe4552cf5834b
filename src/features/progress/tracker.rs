//! Streak and counter aggregation.
//!
//! Both functions are pure: they take the current state and return the
//! next one. Persisting the result is [`super::ProgressRecorder`]'s job.

use chrono::{DateTime, NaiveDate, Utc};

use super::types::{DailyStat, Profile, SessionOutcome, SessionRecord};

/// Fold one completed focus session into the profile and today's stat.
///
/// Every completed session bumps the streak, even when several happen on
/// the same day. `daily_stat` is today's record, if one exists; a record
/// for any other day is ignored and a fresh one started.
#[must_use]
pub fn apply_completed_focus_session(
    profile: &Profile,
    daily_stat: Option<&DailyStat>,
    session_minutes: u32,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> SessionOutcome {
    let current_streak = profile.current_streak.saturating_add(1);

    let next_profile = Profile {
        user_id: profile.user_id.clone(),
        total_sessions: profile.total_sessions.saturating_add(1),
        total_minutes: profile
            .total_minutes
            .saturating_add(u64::from(session_minutes)),
        current_streak,
        longest_streak: profile.longest_streak.max(current_streak),
        last_active_date: Some(today),
        revision: profile.revision,
    };

    let next_stat = match daily_stat.filter(|s| s.date == today) {
        Some(stat) => DailyStat {
            sessions_count: stat.sessions_count.saturating_add(1),
            total_minutes: stat
                .total_minutes
                .saturating_add(u64::from(session_minutes)),
            ..stat.clone()
        },
        None => DailyStat {
            user_id: profile.user_id.clone(),
            date: today,
            sessions_count: 1,
            total_minutes: u64::from(session_minutes),
        },
    };

    SessionOutcome {
        profile: next_profile,
        daily_stat: next_stat,
        record: SessionRecord::focus(session_minutes, now),
    }
}

/// Day-boundary streak check, run once when the application activates.
///
/// Returns `None` when the profile was already active today.
#[must_use]
pub fn reconcile_daily_login(profile: &Profile, today: NaiveDate) -> Option<Profile> {
    if profile.last_active_date == Some(today) {
        return None;
    }

    let yesterday = today.pred_opt();
    let mut next = profile.clone();

    if yesterday.is_some() && profile.last_active_date == yesterday {
        next.current_streak = profile.current_streak.saturating_add(1);
        next.longest_streak = profile.longest_streak.max(next.current_streak);
    } else {
        next.current_streak = 0;
    }
    next.last_active_date = Some(today);

    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::timer::Phase;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn profile(sessions: u32, minutes: u64, current: u32, longest: u32, last: Option<&str>) -> Profile {
        Profile {
            user_id: "u1".to_string(),
            total_sessions: sessions,
            total_minutes: minutes,
            current_streak: current,
            longest_streak: longest,
            last_active_date: last.map(date),
            revision: 7,
        }
    }

    fn stat(day: &str, sessions: u32, minutes: u64) -> DailyStat {
        DailyStat {
            user_id: "u1".to_string(),
            date: date(day),
            sessions_count: sessions,
            total_minutes: minutes,
        }
    }

    #[test]
    fn test_completed_session_with_existing_stat() {
        let now = Utc::now();
        let before = profile(3, 75, 2, 5, Some("2024-01-10"));
        let existing = stat("2024-01-10", 1, 25);

        let outcome =
            apply_completed_focus_session(&before, Some(&existing), 25, date("2024-01-10"), now);

        assert_eq!(outcome.profile, profile(4, 100, 3, 5, Some("2024-01-10")));
        assert_eq!(outcome.daily_stat, stat("2024-01-10", 2, 50));
        assert_eq!(outcome.record.duration_minutes, 25);
        assert_eq!(outcome.record.kind, Phase::Focus);
        assert_eq!(outcome.record.timestamp, now);
    }

    #[test]
    fn test_first_session_of_day_creates_stat() {
        let before = profile(0, 0, 0, 0, None);
        let outcome =
            apply_completed_focus_session(&before, None, 40, date("2024-03-01"), Utc::now());

        assert_eq!(outcome.daily_stat, stat("2024-03-01", 1, 40));
        assert_eq!(outcome.profile.current_streak, 1);
        assert_eq!(outcome.profile.longest_streak, 1);
        assert_eq!(outcome.profile.last_active_date, Some(date("2024-03-01")));
    }

    #[test]
    fn test_stat_from_other_day_is_not_reused() {
        let before = profile(5, 125, 1, 1, Some("2024-03-01"));
        let stale = stat("2024-03-01", 4, 100);
        let outcome = apply_completed_focus_session(
            &before,
            Some(&stale),
            25,
            date("2024-03-02"),
            Utc::now(),
        );
        assert_eq!(outcome.daily_stat, stat("2024-03-02", 1, 25));
    }

    #[test]
    fn test_every_session_bumps_streak() {
        let today = date("2024-01-10");
        let mut p = profile(0, 0, 0, 0, Some("2024-01-10"));
        for _ in 0..3 {
            p = apply_completed_focus_session(&p, None, 25, today, Utc::now()).profile;
        }
        assert_eq!(p.current_streak, 3);
        assert_eq!(p.longest_streak, 3);
        assert_eq!(p.total_sessions, 3);
        assert_eq!(p.total_minutes, 75);
    }

    #[test]
    fn test_longest_streak_follows_current() {
        let before = profile(10, 250, 5, 5, Some("2024-01-10"));
        let outcome =
            apply_completed_focus_session(&before, None, 25, date("2024-01-10"), Utc::now());
        assert_eq!(outcome.profile.current_streak, 6);
        assert_eq!(outcome.profile.longest_streak, 6);
    }

    #[test]
    fn test_revision_is_carried_through() {
        let before = profile(0, 0, 0, 0, None);
        let outcome =
            apply_completed_focus_session(&before, None, 25, date("2024-01-10"), Utc::now());
        assert_eq!(outcome.profile.revision, 7);
    }

    #[test]
    fn test_reconcile_same_day_is_noop() {
        let p = profile(3, 75, 2, 5, Some("2024-01-10"));
        assert_eq!(reconcile_daily_login(&p, date("2024-01-10")), None);
    }

    #[test]
    fn test_reconcile_yesterday_continues_streak() {
        let p = profile(3, 75, 2, 5, Some("2024-01-09"));
        let next = reconcile_daily_login(&p, date("2024-01-10")).unwrap();
        assert_eq!(next.current_streak, 3);
        assert_eq!(next.longest_streak, 5);
        assert_eq!(next.last_active_date, Some(date("2024-01-10")));
        assert_eq!(next.total_sessions, 3);
    }

    #[test]
    fn test_reconcile_yesterday_raises_longest_when_exceeded() {
        let p = profile(3, 75, 5, 5, Some("2024-01-09"));
        let next = reconcile_daily_login(&p, date("2024-01-10")).unwrap();
        assert_eq!(next.current_streak, 6);
        assert_eq!(next.longest_streak, 6);
    }

    #[test]
    fn test_reconcile_gap_resets_streak() {
        let p = profile(3, 75, 4, 9, Some("2024-01-08"));
        let next = reconcile_daily_login(&p, date("2024-01-10")).unwrap();
        assert_eq!(next.current_streak, 0);
        assert_eq!(next.longest_streak, 9);
        assert_eq!(next.last_active_date, Some(date("2024-01-10")));
    }

    #[test]
    fn test_reconcile_never_active() {
        let p = profile(0, 0, 0, 0, None);
        let next = reconcile_daily_login(&p, date("2024-01-10")).unwrap();
        assert_eq!(next.current_streak, 0);
        assert_eq!(next.last_active_date, Some(date("2024-01-10")));
    }

    #[test]
    fn test_reconcile_across_month_boundary() {
        let p = profile(1, 25, 1, 1, Some("2024-02-29"));
        let next = reconcile_daily_login(&p, date("2024-03-01")).unwrap();
        assert_eq!(next.current_streak, 2);
    }
}
