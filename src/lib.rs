//! studyflow - a focus timer and study tracker
//!
//! Alternates focus and break phases, records completed focus sessions,
//! and keeps lifetime totals, daily statistics and streaks in SQLite.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands};
pub use error::StudyError;
pub use output::OutputFormat;
