//! The focus/break state machine.
//!
//! [`SessionTimer`] owns no clock. Each call to [`SessionTimer::tick`]
//! stands for one elapsed second; something else decides when a second
//! has passed (see [`super::ticker`]).

use tracing::{debug, info};

use super::state::{Phase, SessionConfig, TimerEvent, TimerState};
use crate::error::StudyError;

/// Countdown alternating between focus and break phases.
#[derive(Debug, Clone)]
pub struct SessionTimer {
    config: SessionConfig,
    state: TimerState,
    /// Length the current phase started with. Stays fixed while the phase
    /// runs, even if the configured duration is edited meanwhile.
    phase_seconds: u32,
    /// Keep ticking into the next phase instead of stopping at a boundary.
    auto_continue: bool,
}

impl SessionTimer {
    /// Create a stopped timer at the start of a focus phase.
    #[must_use]
    pub const fn new(config: SessionConfig) -> Self {
        Self {
            config,
            state: TimerState::initial(&config),
            phase_seconds: config.seconds_for(Phase::Focus),
            auto_continue: false,
        }
    }

    /// Continue straight into the next phase after a completion.
    #[must_use]
    pub const fn with_auto_continue(mut self, auto_continue: bool) -> Self {
        self.auto_continue = auto_continue;
        self
    }

    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        self.config
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.state.remaining_seconds
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state.running
    }

    /// Full length of the current phase in seconds.
    #[must_use]
    pub const fn phase_seconds(&self) -> u32 {
        self.phase_seconds
    }

    /// Seconds elapsed in the current phase.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> u32 {
        self.phase_seconds - self.state.remaining_seconds
    }

    /// Fraction of the current phase elapsed, from `0.0` to `1.0`.
    ///
    /// Exactly `0.0` at phase start and exactly `1.0` once the remaining
    /// time reaches zero.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.phase_seconds == 0 {
            return 1.0;
        }
        f64::from(self.elapsed_seconds()) / f64::from(self.phase_seconds)
    }

    /// Start or resume the countdown.
    ///
    /// Returns `false` if it was already running.
    pub fn start(&mut self) -> bool {
        if self.state.running {
            return false;
        }
        self.state.running = true;
        debug!(phase = ?self.state.phase, remaining = self.state.remaining_seconds, "timer started");
        true
    }

    /// Stop the countdown, keeping the remaining time.
    pub fn pause(&mut self) {
        if self.state.running {
            debug!(remaining = self.state.remaining_seconds, "timer paused");
        }
        self.state.running = false;
    }

    /// Stop and return to the start of a focus phase.
    pub fn reset(&mut self) {
        self.state = TimerState::initial(&self.config);
        self.phase_seconds = self.state.remaining_seconds;
        debug!("timer reset");
    }

    /// Change the focus duration.
    ///
    /// When the timer is stopped on a focus phase the countdown restarts at
    /// the new length; otherwise the change applies from the next focus phase.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::InvalidDuration` if `minutes` is outside `1..=60`.
    /// The previous duration is kept.
    pub fn set_focus_minutes(&mut self, minutes: u32) -> Result<(), StudyError> {
        self.config.set_focus_minutes(minutes)?;
        self.apply_edit(Phase::Focus);
        Ok(())
    }

    /// Change the break duration.
    ///
    /// When the timer is stopped on a break phase the countdown restarts at
    /// the new length; otherwise the change applies from the next break phase.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::InvalidDuration` if `minutes` is outside `1..=30`.
    /// The previous duration is kept.
    pub fn set_break_minutes(&mut self, minutes: u32) -> Result<(), StudyError> {
        self.config.set_break_minutes(minutes)?;
        self.apply_edit(Phase::Break);
        Ok(())
    }

    fn apply_edit(&mut self, edited: Phase) {
        if !self.state.running && self.state.phase == edited {
            self.phase_seconds = self.config.seconds_for(edited);
            self.state.remaining_seconds = self.phase_seconds;
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the completion event when this tick ends the phase. The
    /// timer is already in the next phase with a full countdown when the
    /// event is returned, so further ticks cannot complete it again.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if !self.state.running {
            return None;
        }

        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);

        if self.state.remaining_seconds == 0 {
            Some(self.complete_phase())
        } else {
            None
        }
    }

    fn complete_phase(&mut self) -> TimerEvent {
        let finished = self.state.phase;
        let event = match finished {
            Phase::Focus => TimerEvent::FocusCompleted {
                minutes: self.phase_seconds / 60,
            },
            Phase::Break => TimerEvent::BreakCompleted,
        };

        let next = finished.next();
        self.phase_seconds = self.config.seconds_for(next);
        self.state = TimerState {
            phase: next,
            remaining_seconds: self.phase_seconds,
            running: self.auto_continue,
        };

        info!(?event, next = ?next, "phase completed");
        event
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer(focus: u32, brk: u32) -> SessionTimer {
        SessionTimer::new(SessionConfig::new(focus, brk).unwrap())
    }

    fn run_ticks(timer: &mut SessionTimer, n: u32) -> Vec<TimerEvent> {
        (0..n).filter_map(|_| timer.tick()).collect()
    }

    #[test]
    fn test_new_timer_is_stopped_on_focus() {
        let t = timer(25, 5);
        assert_eq!(t.phase(), Phase::Focus);
        assert_eq!(t.remaining_seconds(), 1500);
        assert!(!t.is_running());
        assert_eq!(t.progress(), 0.0);
    }

    #[test]
    fn test_tick_ignored_while_stopped() {
        let mut t = timer(25, 5);
        assert!(t.tick().is_none());
        assert_eq!(t.remaining_seconds(), 1500);
    }

    #[test]
    fn test_start_is_noop_when_running() {
        let mut t = timer(25, 5);
        assert!(t.start());
        assert!(!t.start());
        assert!(t.is_running());
    }

    #[test]
    fn test_focus_completes_after_exact_tick_count() {
        let mut t = timer(1, 2);
        t.start();

        assert!(run_ticks(&mut t, 59).is_empty());
        assert_eq!(t.remaining_seconds(), 1);
        assert_eq!(t.phase(), Phase::Focus);

        assert_eq!(t.tick(), Some(TimerEvent::FocusCompleted { minutes: 1 }));
        assert_eq!(t.phase(), Phase::Break);
        assert_eq!(t.remaining_seconds(), 120);
    }

    #[test]
    fn test_break_completes_back_to_focus() {
        let mut t = timer(1, 1);
        t.start();
        run_ticks(&mut t, 60);
        assert_eq!(t.phase(), Phase::Break);

        t.start();
        let events = run_ticks(&mut t, 60);
        assert_eq!(events, vec![TimerEvent::BreakCompleted]);
        assert_eq!(t.phase(), Phase::Focus);
        assert_eq!(t.remaining_seconds(), 60);
    }

    #[test]
    fn test_stops_at_boundary_by_default() {
        let mut t = timer(1, 1);
        t.start();
        run_ticks(&mut t, 60);
        assert!(!t.is_running());

        // Extra ticks do nothing until restarted
        assert!(run_ticks(&mut t, 120).is_empty());
        assert_eq!(t.remaining_seconds(), 60);
    }

    #[test]
    fn test_auto_continue_keeps_running() {
        let mut t = timer(1, 1).with_auto_continue(true);
        t.start();
        let events = run_ticks(&mut t, 120);
        assert_eq!(
            events,
            vec![
                TimerEvent::FocusCompleted { minutes: 1 },
                TimerEvent::BreakCompleted
            ]
        );
        assert!(t.is_running());
        assert_eq!(t.phase(), Phase::Focus);
    }

    #[test]
    fn test_completion_emitted_once_per_phase() {
        let mut t = timer(1, 30).with_auto_continue(true);
        t.start();
        let events = run_ticks(&mut t, 61);
        assert_eq!(events.len(), 1);
        assert_eq!(t.remaining_seconds(), 30 * 60 - 1);
    }

    #[test]
    fn test_pause_preserves_remaining_and_is_idempotent() {
        let mut t = timer(25, 5);
        t.start();
        run_ticks(&mut t, 10);

        t.pause();
        let after_first = t.state();
        t.pause();
        assert_eq!(t.state(), after_first);
        assert_eq!(after_first.remaining_seconds, 1490);
        assert!(!after_first.running);
    }

    #[test]
    fn test_reset_returns_to_focus_from_break() {
        let mut t = timer(1, 5);
        t.start();
        run_ticks(&mut t, 60);
        t.start();
        run_ticks(&mut t, 30);
        assert_eq!(t.phase(), Phase::Break);

        t.reset();
        assert_eq!(t.phase(), Phase::Focus);
        assert_eq!(t.remaining_seconds(), 60);
        assert!(!t.is_running());
        assert_eq!(t.progress(), 0.0);
    }

    #[test]
    fn test_reset_for_every_valid_config() {
        for focus in 1..=60 {
            for brk in [1, 15, 30] {
                let mut t = timer(focus, brk);
                t.start();
                run_ticks(&mut t, 7);
                t.reset();
                assert_eq!(
                    t.state(),
                    TimerState {
                        phase: Phase::Focus,
                        remaining_seconds: focus * 60,
                        running: false,
                    }
                );
            }
        }
    }

    #[test]
    fn test_edit_active_phase_while_stopped_recomputes() {
        let mut t = timer(25, 5);
        t.start();
        run_ticks(&mut t, 100);
        t.pause();

        t.set_focus_minutes(10).unwrap();
        assert_eq!(t.remaining_seconds(), 600);
        assert_eq!(t.phase_seconds(), 600);
        assert_eq!(t.progress(), 0.0);
    }

    #[test]
    fn test_edit_inactive_phase_is_deferred() {
        let mut t = timer(25, 5);
        t.set_break_minutes(10).unwrap();
        assert_eq!(t.remaining_seconds(), 1500);

        t.start();
        run_ticks(&mut t, 1500);
        assert_eq!(t.phase(), Phase::Break);
        assert_eq!(t.remaining_seconds(), 600);
    }

    #[test]
    fn test_edit_while_running_is_deferred() {
        let mut t = timer(2, 5);
        t.start();
        run_ticks(&mut t, 30);

        t.set_focus_minutes(1).unwrap();
        assert_eq!(t.remaining_seconds(), 90);
        assert_eq!(t.phase_seconds(), 120);

        // The running phase finishes with the length it started with
        let events = run_ticks(&mut t, 90);
        assert_eq!(events, vec![TimerEvent::FocusCompleted { minutes: 2 }]);

        t.reset();
        assert_eq!(t.remaining_seconds(), 60);
    }

    #[test]
    fn test_invalid_edit_keeps_previous_value() {
        let mut t = timer(25, 5);
        assert!(t.set_focus_minutes(0).is_err());
        assert!(t.set_focus_minutes(61).is_err());
        assert!(t.set_break_minutes(31).is_err());
        assert_eq!(t.config(), SessionConfig::new(25, 5).unwrap());
        assert_eq!(t.remaining_seconds(), 1500);
    }

    #[test]
    fn test_progress_monotonic_and_resets_at_transition() {
        let mut t = timer(1, 1).with_auto_continue(true);
        t.start();

        let mut last = t.progress();
        for _ in 0..59 {
            t.tick();
            let p = t.progress();
            assert!(p >= last);
            last = p;
        }
        assert!(last < 1.0);

        t.tick();
        assert_eq!(t.phase(), Phase::Break);
        assert_eq!(t.progress(), 0.0);
    }

    #[test]
    fn test_progress_is_exactly_one_at_zero() {
        let mut t = timer(1, 1);
        t.state.remaining_seconds = 0;
        assert_eq!(t.progress(), 1.0);
    }

    #[test]
    fn test_tick_at_zero_completes_exactly_once() {
        let mut t = timer(1, 1);
        t.state.remaining_seconds = 0;
        t.start();

        assert_eq!(t.tick(), Some(TimerEvent::FocusCompleted { minutes: 1 }));
        assert_eq!(t.phase(), Phase::Break);

        // Rapid re-entrant ticks after the transition fire nothing
        t.start();
        assert!(run_ticks(&mut t, 5).is_empty());
        assert_eq!(t.remaining_seconds(), 55);
    }
}
