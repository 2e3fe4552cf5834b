//! Feature implementations for studyflow.
//!
//! - Focus/break timer
//! - Progress tracking and persistence
//! - Statistics dashboard
//! - Motivational quotes
//! - Ambient music presets

pub mod music;
pub mod progress;
pub mod quotes;
pub mod stats;
pub mod timer;
