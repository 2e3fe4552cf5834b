//! Storage layer for studyflow.
//!
//! This module provides SQLite-based persistence for:
//! - User profiles (lifetime totals and streaks)
//! - Daily statistics
//! - The completed session log

mod database;
mod migrations;
mod traits;

pub use database::Database;
#[cfg(test)]
pub use traits::MockProgressStore;
pub use traits::ProgressStore;
