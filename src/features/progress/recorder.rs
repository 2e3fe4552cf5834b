//! Persisting progress through a [`ProgressStore`].
//!
//! The recorder takes `&mut self` for every write, so one recorder runs at
//! most one aggregation at a time. Daily stats are incremented atomically
//! by the store; profile writes are compare-and-swap and retried with a
//! fresh read when another writer got there first.
//!
//! Call [`ProgressRecorder::activate`] once when the application starts,
//! before recording any session. Sessions recorded afterwards each bump
//! the streak, so the first session on a day following an active day
//! counts twice: once for the login, once for the session.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info, warn};

use super::tracker::{apply_completed_focus_session, reconcile_daily_login};
use super::types::{DailyStatDelta, Profile, SessionOutcome};
use crate::error::StudyError;
use crate::storage::ProgressStore;

/// Default number of retries after a conflicting profile write.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Applies progress rules and writes the results to a store.
pub struct ProgressRecorder<S: ProgressStore> {
    store: S,
    max_retries: u32,
}

impl<S: ProgressStore> ProgressRecorder<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            store,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Set how many times a conflicting profile write is retried.
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Load a profile, creating an empty one on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn load_profile(&self, user_id: &str) -> Result<Profile, StudyError> {
        match self.store.get_profile(user_id)? {
            Some(profile) => Ok(profile),
            None => {
                info!(user_id, "creating profile");
                self.store.create_profile(user_id)
            }
        }
    }

    /// Run the day-boundary streak check for an application start.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails, or `StudyError::RetriesExhausted`
    /// if concurrent writers kept winning.
    pub fn activate(&mut self, user_id: &str, today: NaiveDate) -> Result<Profile, StudyError> {
        let profile = self.load_profile(user_id)?;

        match reconcile_daily_login(&profile, today) {
            None => Ok(profile),
            Some(next) => {
                debug!(
                    user_id,
                    from = profile.current_streak,
                    to = next.current_streak,
                    "reconciled streak"
                );
                self.commit_profile(user_id, next, |fresh| reconcile_daily_login(fresh, today))
            }
        }
    }

    /// Persist one completed focus session.
    ///
    /// Appends the session log entry, increments today's stat and updates
    /// the profile counters and streak. Failures are returned to the
    /// caller; nothing already written is rolled back.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the profile, appending the log entry or
    /// incrementing the daily stat fails. If only the profile write fails,
    /// including running out of conflict retries, returns
    /// `StudyError::ProfileNotUpdated` carrying the stored daily stat.
    pub fn record_focus_session(
        &mut self,
        user_id: &str,
        minutes: u32,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<SessionOutcome, StudyError> {
        let profile = self.load_profile(user_id)?;
        let existing = self.store.get_daily_stat(user_id, today)?;
        let planned =
            apply_completed_focus_session(&profile, existing.as_ref(), minutes, today, now);

        self.store.append_session_record(user_id, &planned.record)?;

        let daily_stat =
            self.store
                .upsert_daily_stat(user_id, today, DailyStatDelta::for_session(minutes))?;
        if daily_stat != planned.daily_stat {
            debug!(user_id, %today, "daily stat changed concurrently");
        }

        let committed = self.commit_profile(user_id, planned.profile, |fresh| {
            Some(apply_completed_focus_session(fresh, None, minutes, today, now).profile)
        });
        let profile = match committed {
            Ok(profile) => profile,
            Err(e) => {
                warn!(user_id, error = %e, "session logged but profile not updated");
                return Err(StudyError::ProfileNotUpdated {
                    daily_stat: Box::new(daily_stat),
                    record: Box::new(planned.record),
                    source: Box::new(e),
                });
            }
        };

        info!(
            user_id,
            minutes,
            total_sessions = profile.total_sessions,
            streak = profile.current_streak,
            "recorded focus session"
        );

        Ok(SessionOutcome {
            profile,
            daily_stat,
            record: planned.record,
        })
    }

    /// Write `next`, recomputing it from a fresh read after each conflict.
    ///
    /// `recompute` returning `None` means the fresh profile needs no change.
    fn commit_profile<F>(
        &mut self,
        user_id: &str,
        mut next: Profile,
        recompute: F,
    ) -> Result<Profile, StudyError>
    where
        F: Fn(&Profile) -> Option<Profile>,
    {
        let mut conflicts = 0;

        loop {
            match self.store.update_profile(user_id, &next) {
                Ok(saved) => return Ok(saved),
                Err(e) if e.is_retryable() => {
                    conflicts += 1;
                    if conflicts > self.max_retries {
                        warn!(user_id, conflicts, "giving up on profile update");
                        return Err(StudyError::RetriesExhausted {
                            attempts: conflicts,
                        });
                    }
                    warn!(user_id, conflicts, error = %e, "profile update conflicted, retrying");

                    let fresh = self.load_profile(user_id)?;
                    match recompute(&fresh) {
                        Some(p) => next = p,
                        None => return Ok(fresh),
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }
}
