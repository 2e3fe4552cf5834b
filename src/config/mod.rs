//! Configuration management for studyflow.
//!
//! This module handles loading and saving configuration from `~/.studyflow/`
//! (or `$STUDYFLOW_HOME`).

mod paths;
mod settings;

pub use paths::{Paths, HOME_ENV};
pub use settings::{
    AppearanceConfig, Config, GeneralConfig, MusicConfig, SyncConfig, Theme, TimerConfig,
};
