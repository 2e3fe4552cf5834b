//! Timer state types.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::StudyError;

/// Accepted focus durations, in minutes.
pub const FOCUS_MINUTES_RANGE: RangeInclusive<u32> = 1..=60;
/// Accepted break durations, in minutes.
pub const BREAK_MINUTES_RANGE: RangeInclusive<u32> = 1..=30;

/// One of the two alternating timer phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Focused study time
    Focus,
    /// Rest between focus phases
    Break,
}

impl Phase {
    /// The phase that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Focus => Self::Break,
            Self::Break => Self::Focus,
        }
    }

    /// Label shown to the user.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Focus => "Focus Time",
            Self::Break => "Break Time",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// User-chosen phase durations.
///
/// Both values are always inside their accepted ranges; the setters reject
/// anything else and keep the previous value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    focus_minutes: u32,
    break_minutes: u32,
}

impl SessionConfig {
    /// Create a config, validating both durations.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::InvalidDuration` if either value is out of range.
    pub fn new(focus_minutes: u32, break_minutes: u32) -> Result<Self, StudyError> {
        Ok(Self {
            focus_minutes: validate_focus_minutes(focus_minutes)?,
            break_minutes: validate_break_minutes(break_minutes)?,
        })
    }

    #[must_use]
    pub const fn focus_minutes(&self) -> u32 {
        self.focus_minutes
    }

    #[must_use]
    pub const fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Minutes configured for a phase.
    #[must_use]
    pub const fn minutes_for(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Focus => self.focus_minutes,
            Phase::Break => self.break_minutes,
        }
    }

    /// Full length of a phase in seconds.
    #[must_use]
    pub const fn seconds_for(&self, phase: Phase) -> u32 {
        self.minutes_for(phase) * 60
    }

    /// Replace the focus duration.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::InvalidDuration` and leaves the config untouched
    /// if `minutes` is outside `1..=60`.
    pub fn set_focus_minutes(&mut self, minutes: u32) -> Result<(), StudyError> {
        self.focus_minutes = validate_focus_minutes(minutes)?;
        Ok(())
    }

    /// Replace the break duration.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::InvalidDuration` and leaves the config untouched
    /// if `minutes` is outside `1..=30`.
    pub fn set_break_minutes(&mut self, minutes: u32) -> Result<(), StudyError> {
        self.break_minutes = validate_break_minutes(minutes)?;
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            break_minutes: 5,
        }
    }
}

/// Check a focus duration against [`FOCUS_MINUTES_RANGE`].
///
/// # Errors
///
/// Returns `StudyError::InvalidDuration` when out of range.
pub fn validate_focus_minutes(minutes: u32) -> Result<u32, StudyError> {
    validate(minutes, "focus duration", &FOCUS_MINUTES_RANGE)
}

/// Check a break duration against [`BREAK_MINUTES_RANGE`].
///
/// # Errors
///
/// Returns `StudyError::InvalidDuration` when out of range.
pub fn validate_break_minutes(minutes: u32) -> Result<u32, StudyError> {
    validate(minutes, "break duration", &BREAK_MINUTES_RANGE)
}

fn validate(
    minutes: u32,
    field: &'static str,
    range: &RangeInclusive<u32>,
) -> Result<u32, StudyError> {
    if range.contains(&minutes) {
        Ok(minutes)
    } else {
        Err(StudyError::InvalidDuration {
            field,
            value: minutes,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// Observable timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    /// Phase currently displayed
    pub phase: Phase,
    /// Seconds left in the phase
    pub remaining_seconds: u32,
    /// Whether the countdown is ticking
    pub running: bool,
}

impl TimerState {
    /// Initial state for a config: Focus, full duration, not running.
    #[must_use]
    pub const fn initial(config: &SessionConfig) -> Self {
        Self {
            phase: Phase::Focus,
            remaining_seconds: config.seconds_for(Phase::Focus),
            running: false,
        }
    }
}

/// Emitted by the timer at a phase boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum TimerEvent {
    /// A focus phase ran to zero.
    FocusCompleted { minutes: u32 },
    /// A break phase ran to zero.
    BreakCompleted,
}
