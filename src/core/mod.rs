//! Core abstractions for studyflow.
//!
//! This module provides the time sources shared by the timer and the
//! progress tracker.

mod clock;

pub use clock::{local_today, Clock, ManualClock, SystemClock};
