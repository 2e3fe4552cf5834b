//! Progress tracking: lifetime totals, streaks and per-day statistics.
//!
//! The rules live in [`tracker`] as pure functions over in-memory values.
//! [`ProgressRecorder`] applies them through a [`crate::storage::ProgressStore`].

pub mod recorder;
pub mod storage;
pub mod tracker;
pub mod types;

pub use recorder::{ProgressRecorder, DEFAULT_MAX_RETRIES};
pub use storage::SqliteProgressStore;
pub use tracker::{apply_completed_focus_session, reconcile_daily_login};
pub use types::{DailyStat, DailyStatDelta, Profile, SessionOutcome, SessionRecord};
