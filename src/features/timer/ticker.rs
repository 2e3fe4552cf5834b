//! One-second tick scheduling.
//!
//! A [`Ticker`] holds at most one pending deadline. Firing takes the
//! deadline away; the next one is only scheduled after the tick has been
//! applied, and only if the timer is still running. Pausing or resetting
//! drops the pending deadline so nothing fires afterwards.

use std::time::{Duration, Instant};

use tracing::trace;

use super::machine::SessionTimer;
use super::state::TimerEvent;
use crate::core::Clock;
use crate::error::StudyError;

/// Interval between ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// A cancellable single-slot tick schedule.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next: Option<Instant>,
}

impl Ticker {
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: None,
        }
    }

    /// Schedule the first tick one interval from `now`. No-op if already armed.
    pub fn arm(&mut self, now: Instant) {
        if self.next.is_none() {
            self.next = Some(now + self.interval);
        }
    }

    /// Cancel the pending tick.
    pub fn disarm(&mut self) {
        self.next = None;
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.next.is_some()
    }

    /// Take the pending deadline if it has passed.
    ///
    /// The ticker is left unarmed; call [`Ticker::schedule_after`] once the
    /// tick has been applied.
    pub fn take_due(&mut self, now: Instant) -> Option<Instant> {
        match self.next {
            Some(deadline) if now >= deadline => self.next.take(),
            _ => None,
        }
    }

    /// Schedule the tick following one that fired at `deadline`.
    pub fn schedule_after(&mut self, deadline: Instant) {
        self.next = Some(deadline + self.interval);
    }

    /// Time left until the pending tick, if any.
    #[must_use]
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next.map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

/// Drives a [`SessionTimer`] from a [`Clock`].
///
/// This is the only place the timer meets real time. Callers poll
/// [`TimerDriver::pump`] from their event loop and receive completion
/// events in order.
#[derive(Debug)]
pub struct TimerDriver<C: Clock> {
    timer: SessionTimer,
    ticker: Ticker,
    clock: C,
}

impl<C: Clock> TimerDriver<C> {
    #[must_use]
    pub fn new(timer: SessionTimer, clock: C) -> Self {
        Self {
            timer,
            ticker: Ticker::default(),
            clock,
        }
    }

    #[must_use]
    pub const fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Whether a tick is scheduled.
    #[must_use]
    pub const fn is_ticking(&self) -> bool {
        self.ticker.is_armed()
    }

    pub fn start(&mut self) {
        if self.timer.start() {
            self.ticker.arm(self.clock.now());
        }
    }

    pub fn pause(&mut self) {
        self.timer.pause();
        self.ticker.disarm();
    }

    /// Start when stopped, pause when running.
    pub fn toggle(&mut self) {
        if self.timer.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    pub fn reset(&mut self) {
        self.timer.reset();
        self.ticker.disarm();
    }

    /// # Errors
    ///
    /// See [`SessionTimer::set_focus_minutes`].
    pub fn set_focus_minutes(&mut self, minutes: u32) -> Result<(), StudyError> {
        self.timer.set_focus_minutes(minutes)
    }

    /// # Errors
    ///
    /// See [`SessionTimer::set_break_minutes`].
    pub fn set_break_minutes(&mut self, minutes: u32) -> Result<(), StudyError> {
        self.timer.set_break_minutes(minutes)
    }

    /// Apply every tick that has come due, one at a time.
    pub fn pump(&mut self) -> Vec<TimerEvent> {
        let mut events = Vec::new();

        while let Some(deadline) = self.ticker.take_due(self.clock.now()) {
            trace!(remaining = self.timer.remaining_seconds(), "tick");
            if let Some(event) = self.timer.tick() {
                events.push(event);
            }
            if self.timer.is_running() {
                self.ticker.schedule_after(deadline);
            }
        }

        events
    }

    /// How long the caller may wait before the next tick is due.
    #[must_use]
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        self.ticker.until_next(self.clock.now())
    }
}
