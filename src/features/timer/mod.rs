//! Focus/break countdown.
//!
//! - [`SessionTimer`]: the phase state machine, advanced one second per tick
//! - [`TimerDriver`]: feeds ticks from a clock, cancellable on pause/reset
//! - formatting helpers for countdowns and totals

pub mod format;
pub mod machine;
pub mod state;
pub mod ticker;

pub use format::{format_duration, format_minutes, format_mmss, render_progress_bar};
pub use machine::SessionTimer;
pub use state::{
    validate_break_minutes, validate_focus_minutes, Phase, SessionConfig, TimerEvent, TimerState,
    BREAK_MINUTES_RANGE, FOCUS_MINUTES_RANGE,
};
pub use ticker::{Ticker, TimerDriver, TICK_INTERVAL};
