//! Dashboard aggregation over a profile and its recent daily stats.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::features::progress::{DailyStat, Profile};

/// Days of history shown in the trend.
pub const TREND_DAYS: i64 = 14;

/// Most recent active days counted as "this week".
pub const WEEK_DAYS: usize = 7;

/// One day of the trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub sessions: u32,
    pub minutes: u64,
}

/// Everything the stats view shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub total_sessions: u32,
    pub total_minutes: u64,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Days with recorded activity, oldest first
    pub trend: Vec<TrendPoint>,
    /// Mean focus minutes over the days in `trend`, rounded
    pub average_minutes_per_day: u64,
    pub week_sessions: u32,
    pub week_minutes: u64,
}

impl Dashboard {
    /// First day included in the trend for `today`.
    #[must_use]
    pub fn trend_start(today: NaiveDate) -> NaiveDate {
        today - Duration::days(TREND_DAYS)
    }

    /// Build the dashboard from a profile and its daily stats.
    ///
    /// Stats outside the trend window are ignored, so callers may pass
    /// more than they fetched for the window.
    #[must_use]
    pub fn build(profile: &Profile, stats: &[DailyStat], today: NaiveDate) -> Self {
        let trend_start = Self::trend_start(today);

        let mut trend: Vec<TrendPoint> = stats
            .iter()
            .filter(|s| s.date >= trend_start && s.date <= today)
            .map(|s| TrendPoint {
                date: s.date,
                sessions: s.sessions_count,
                minutes: s.total_minutes,
            })
            .collect();
        trend.sort_by_key(|p| p.date);

        let trend_minutes: u64 = trend.iter().map(|p| p.minutes).sum();
        let days = trend.len() as u64;
        let average_minutes_per_day = if days == 0 {
            0
        } else {
            (trend_minutes + days / 2) / days
        };

        // The latest active days in the window, not a calendar week
        let this_week = trend.iter().rev().take(WEEK_DAYS);
        let (week_sessions, week_minutes) = this_week.fold((0u32, 0u64), |(s, m), p| {
            (s.saturating_add(p.sessions), m.saturating_add(p.minutes))
        });

        Self {
            total_sessions: profile.total_sessions,
            total_minutes: profile.total_minutes,
            current_streak: profile.current_streak,
            longest_streak: profile.longest_streak,
            trend,
            average_minutes_per_day,
            week_sessions,
            week_minutes,
        }
    }

    /// Whole hours focused this week.
    #[must_use]
    pub const fn week_hours(&self) -> u64 {
        self.week_minutes / 60
    }

    /// Minutes per day across the full trend window, zero-filled, oldest first.
    #[must_use]
    pub fn minutes_by_day(&self, today: NaiveDate) -> Vec<u64> {
        let start = Self::trend_start(today);
        (0..=TREND_DAYS)
            .map(|offset| {
                let day = start + Duration::days(offset);
                self.trend
                    .iter()
                    .find(|p| p.date == day)
                    .map_or(0, |p| p.minutes)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn stat(d: &str, sessions: u32, minutes: u64) -> DailyStat {
        DailyStat {
            user_id: "u1".to_string(),
            date: date(d),
            sessions_count: sessions,
            total_minutes: minutes,
        }
    }

    fn profile() -> Profile {
        Profile {
            total_sessions: 40,
            total_minutes: 1000,
            current_streak: 3,
            longest_streak: 8,
            ..Profile::new("u1")
        }
    }

    #[test]
    fn test_empty_dashboard() {
        let d = Dashboard::build(&profile(), &[], date("2024-01-20"));
        assert!(d.trend.is_empty());
        assert_eq!(d.average_minutes_per_day, 0);
        assert_eq!(d.week_sessions, 0);
        assert_eq!(d.week_hours(), 0);
        assert_eq!(d.total_sessions, 40);
        assert_eq!(d.longest_streak, 8);
    }

    #[test]
    fn test_trend_window_is_fourteen_days_back() {
        let today = date("2024-01-20");
        let stats = [
            stat("2024-01-05", 9, 900),
            stat("2024-01-06", 1, 25),
            stat("2024-01-20", 2, 50),
        ];
        let d = Dashboard::build(&profile(), &stats, today);
        assert_eq!(d.trend.len(), 2);
        assert_eq!(d.trend[0].date, date("2024-01-06"));
    }

    #[test]
    fn test_average_is_rounded() {
        let today = date("2024-01-20");
        let stats = [
            stat("2024-01-18", 1, 25),
            stat("2024-01-19", 1, 30),
        ];
        let d = Dashboard::build(&profile(), &stats, today);
        // 55 / 2 = 27.5
        assert_eq!(d.average_minutes_per_day, 28);
    }

    #[test]
    fn test_week_totals() {
        let today = date("2024-01-20");
        let stats = [
            stat("2024-01-10", 4, 100),
            stat("2024-01-13", 1, 25),
            stat("2024-01-14", 2, 60),
            stat("2024-01-20", 3, 75),
        ];
        let d = Dashboard::build(&profile(), &stats, today);
        // Fewer than seven active days: all of them count
        assert_eq!(d.week_sessions, 10);
        assert_eq!(d.week_minutes, 260);
        assert_eq!(d.week_hours(), 4);
    }

    #[test]
    fn test_week_is_last_seven_active_days() {
        let today = date("2024-01-20");
        let stats: Vec<DailyStat> = (7..=20)
            .filter(|d| d % 2 == 0 || *d == 19)
            .map(|d| stat(&format!("2024-01-{d:02}"), 1, 30))
            .collect();
        // Active days 08, 10, 12, 14, 16, 18, 19, 20
        assert_eq!(stats.len(), 8);

        let d = Dashboard::build(&profile(), &stats, today);
        assert_eq!(d.trend.len(), 8);
        assert_eq!(d.week_sessions, 7);
        assert_eq!(d.week_minutes, 210);
    }

    #[test]
    fn test_trend_sorted_oldest_first() {
        let today = date("2024-01-20");
        let stats = [stat("2024-01-19", 1, 25), stat("2024-01-15", 1, 25)];
        let d = Dashboard::build(&profile(), &stats, today);
        assert!(d.trend[0].date < d.trend[1].date);
    }

    #[test]
    fn test_minutes_by_day_zero_fills() {
        let today = date("2024-01-20");
        let stats = [stat("2024-01-06", 1, 25), stat("2024-01-20", 2, 50)];
        let d = Dashboard::build(&profile(), &stats, today);
        let series = d.minutes_by_day(today);
        assert_eq!(series.len(), 15);
        assert_eq!(series[0], 25);
        assert_eq!(series[14], 50);
        assert_eq!(series[1..14].iter().sum::<u64>(), 0);
    }

    #[test]
    fn test_dashboard_json_field_names() {
        let d = Dashboard::build(&profile(), &[], date("2024-01-20"));
        let json = serde_json::to_string(&d).unwrap();
        assert!(json.contains("\"averageMinutesPerDay\""));
        assert!(json.contains("\"weekSessions\""));
    }
}
