//! Statistics dashboard.
//!
//! Builds the view shown by `studyflow stats` and the TUI stats panel:
//! - Lifetime totals and streaks
//! - A 14-day trend with average focus time per day
//! - This week's sessions and hours

pub mod dashboard;
pub mod visualization;

pub use dashboard::{Dashboard, TrendPoint, TREND_DAYS, WEEK_DAYS};
pub use visualization::{render_bar_chart, render_sparkline, render_summary_box};
