//! Music command implementation.

use crate::cli::args::MusicCommands;
use crate::config::Config;
use crate::error::StudyError;
use crate::features::music::{find_preset, validate_custom_url, validate_volume, MusicPlayer};
use crate::output::{format_music, OutputFormat};

/// Execute music subcommands.
///
/// Changes are saved to the config file.
///
/// # Errors
///
/// Returns an error for an unknown preset, a bad URL or volume, or if the
/// config cannot be saved.
pub fn music(
    config: &mut Config,
    cmd: Option<MusicCommands>,
    format: OutputFormat,
) -> Result<String, StudyError> {
    match cmd {
        None | Some(MusicCommands::List) => {}
        Some(MusicCommands::Select { preset }) => {
            let preset = find_preset(&preset)
                .ok_or_else(|| StudyError::NotFound(format!("music preset '{preset}'")))?;
            config.music.preset = preset.id.to_string();
            config.music.custom_url = None;
            config.save()?;
        }
        Some(MusicCommands::Url { url }) => {
            config.music.custom_url = Some(validate_custom_url(&url)?);
            config.save()?;
        }
        Some(MusicCommands::Volume { level }) => {
            config.music.volume = validate_volume(level)?;
            config.save()?;
        }
    }

    let player = MusicPlayer::from_settings(
        &config.music.preset,
        config.music.custom_url.as_deref(),
        config.music.volume,
    );
    format_music(&player, format)
}
