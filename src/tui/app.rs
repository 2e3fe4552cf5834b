//! Application state for the TUI.

use chrono::Utc;
use tracing::warn;

use crate::config::Theme;
use crate::core::{local_today, Clock};
use crate::error::StudyError;
use crate::features::music::MusicPlayer;
use crate::features::progress::{DailyStat, Profile, ProgressRecorder};
use crate::features::quotes::Quote;
use crate::features::timer::{TimerDriver, TimerEvent};
use crate::storage::ProgressStore;

/// Settings the TUI reads once at startup.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub user: String,
    pub theme: Theme,
    pub bell: bool,
}

/// Application state.
pub struct App<S: ProgressStore, C: Clock> {
    /// Timer and its tick schedule.
    pub driver: TimerDriver<C>,
    recorder: ProgressRecorder<S>,
    settings: AppSettings,
    /// Latest known profile, if it could be loaded.
    pub profile: Option<Profile>,
    /// Today's stat, if any session was recorded today.
    pub today: Option<DailyStat>,
    pub quote: Quote,
    pub player: MusicPlayer,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
    bell_pending: bool,
}

impl<S: ProgressStore, C: Clock> App<S, C> {
    /// Create the app and run the start-of-day streak check.
    ///
    /// Storage failures are shown in the status bar; the timer works without them.
    pub fn new(
        driver: TimerDriver<C>,
        recorder: ProgressRecorder<S>,
        settings: AppSettings,
        player: MusicPlayer,
        quote: Quote,
    ) -> Self {
        let mut app = Self {
            driver,
            recorder,
            settings,
            profile: None,
            today: None,
            quote,
            player,
            status: Some("Press space to start, ? for help".to_string()),
            should_quit: false,
            bell_pending: false,
        };
        app.activate();
        app
    }

    fn activate(&mut self) {
        let today = local_today();
        let user = self.settings.user.clone();

        match self.recorder.activate(&user, today) {
            Ok(profile) => self.profile = Some(profile),
            Err(e) => {
                warn!(error = %e, "could not load progress");
                self.status = Some(format!("Stats unavailable: {e}"));
                return;
            }
        }

        match self.recorder.store().get_daily_stat(&user, today) {
            Ok(stat) => self.today = stat,
            Err(e) => warn!(error = %e, "could not load today's stats"),
        }
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.settings.theme
    }

    pub fn toggle_timer(&mut self) {
        self.driver.toggle();
        self.status = None;
    }

    pub fn reset_timer(&mut self) {
        self.driver.reset();
        self.status = Some("Timer reset".to_string());
    }

    /// Change the focus length by `delta` minutes.
    pub fn adjust_focus(&mut self, delta: i32) {
        let current = self.driver.timer().config().focus_minutes();
        let Some(minutes) = current.checked_add_signed(delta) else {
            return;
        };
        self.status = Some(match self.driver.set_focus_minutes(minutes) {
            Ok(()) => format!("Focus: {minutes} min"),
            Err(e) => e.to_string(),
        });
    }

    /// Change the break length by `delta` minutes.
    pub fn adjust_break(&mut self, delta: i32) {
        let current = self.driver.timer().config().break_minutes();
        let Some(minutes) = current.checked_add_signed(delta) else {
            return;
        };
        self.status = Some(match self.driver.set_break_minutes(minutes) {
            Ok(()) => format!("Break: {minutes} min"),
            Err(e) => e.to_string(),
        });
    }

    pub fn toggle_music(&mut self) {
        let playing = self.player.toggle();
        let track = self.player.track().name();
        self.status = Some(if playing {
            format!("Playing: {track}")
        } else {
            format!("Paused: {track}")
        });
    }

    pub fn next_track(&mut self) {
        self.player.next_track();
        self.status = Some(format!("Loaded: {}", self.player.track().name()));
    }

    /// Apply due ticks and react to phase completions.
    pub fn on_tick(&mut self) {
        for event in self.driver.pump() {
            self.handle_timer_event(event);
        }
    }

    fn handle_timer_event(&mut self, event: TimerEvent) {
        if self.settings.bell {
            self.bell_pending = true;
        }

        match event {
            TimerEvent::FocusCompleted { minutes } => {
                let user = self.settings.user.clone();
                match self
                    .recorder
                    .record_focus_session(&user, minutes, local_today(), Utc::now())
                {
                    Ok(outcome) => {
                        self.status = Some(format!(
                            "Focus session complete! Streak: {}",
                            outcome.profile.current_streak
                        ));
                        self.profile = Some(outcome.profile);
                        self.today = Some(outcome.daily_stat);
                    }
                    Err(StudyError::ProfileNotUpdated {
                        daily_stat, source, ..
                    }) => {
                        warn!(error = %source, minutes, "focus session saved without profile");
                        self.today = Some(*daily_stat);
                        self.status = Some(format!("Stats saved, profile update failed: {source}"));
                    }
                    Err(e) => {
                        warn!(error = %e, minutes, "failed to save focus session");
                        self.status = Some(format!("Session not saved: {e}"));
                    }
                }
            }
            TimerEvent::BreakCompleted => {
                self.status = Some("Break over. Ready to focus?".to_string());
            }
        }
    }

    /// Whether the bell should ring, clearing the request.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
