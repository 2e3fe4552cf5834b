//! Start command: open the timer screen.

use crate::cli::args::StartArgs;
use crate::config::Config;
use crate::core::SystemClock;
use crate::error::StudyError;
use crate::features::music::MusicPlayer;
use crate::features::quotes::random_quote;
use crate::features::timer::{SessionConfig, SessionTimer, TimerDriver};
use crate::tui::{self, App, AppSettings};

use super::open_recorder;

/// Resolve the session lengths, letting command-line values override the config.
///
/// # Errors
///
/// Returns `StudyError::InvalidDuration` if a length is out of range.
pub fn session_config(config: &Config, args: &StartArgs) -> Result<SessionConfig, StudyError> {
    SessionConfig::new(
        args.focus.unwrap_or(config.timer.focus_minutes),
        args.break_minutes.unwrap_or(config.timer.break_minutes),
    )
}

/// Execute start command
///
/// # Errors
///
/// Returns an error for invalid lengths, an unusable database or terminal.
pub fn start(config: &Config, args: &StartArgs) -> Result<String, StudyError> {
    let session = session_config(config, args)?;
    let timer =
        SessionTimer::new(session).with_auto_continue(args.auto_continue || config.timer.auto_continue);

    let player = MusicPlayer::from_settings(
        &config.music.preset,
        config.music.custom_url.as_deref(),
        config.music.volume,
    );
    let settings = AppSettings {
        user: config.general.user.clone(),
        theme: config.appearance.theme,
        bell: config.timer.bell,
    };

    let app = App::new(
        TimerDriver::new(timer, SystemClock),
        open_recorder(config)?,
        settings,
        player,
        random_quote(&mut rand::thread_rng()),
    );
    tui::run(app)?;
    Ok(String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_overrides() {
        let config = Config::default();
        let args = StartArgs {
            focus: Some(50),
            break_minutes: None,
            auto_continue: false,
        };
        let session = session_config(&config, &args).unwrap();
        assert_eq!(session.focus_minutes(), 50);
        assert_eq!(session.break_minutes(), 5);
    }

    #[test]
    fn test_session_config_rejects_out_of_range() {
        let config = Config::default();
        let args = StartArgs {
            focus: None,
            break_minutes: Some(31),
            auto_continue: false,
        };
        assert!(matches!(
            session_config(&config, &args),
            Err(StudyError::InvalidDuration { .. })
        ));
    }
}
