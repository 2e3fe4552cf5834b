//! Ambient music presets and player state.
//!
//! There is no audio engine here. The player tracks what would be playing
//! so the TUI and config can show and persist it.

use serde::Serialize;

use crate::error::StudyError;

/// A built-in track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MusicPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub emoji: &'static str,
}

pub const PRESETS: [MusicPreset; 4] = [
    MusicPreset {
        id: "lofi",
        name: "Lo-Fi Study Beats",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3",
        emoji: "🎧",
    },
    MusicPreset {
        id: "rain",
        name: "Rain Sounds",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3",
        emoji: "🌧️",
    },
    MusicPreset {
        id: "cafe",
        name: "Cafe Ambience",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-3.mp3",
        emoji: "☕",
    },
    MusicPreset {
        id: "white-noise",
        name: "White Noise",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-4.mp3",
        emoji: "🌊",
    },
];

pub const DEFAULT_VOLUME: u8 = 70;
pub const MAX_VOLUME: u8 = 100;

/// Look up a preset by id.
pub fn find_preset(id: &str) -> Option<&'static MusicPreset> {
    PRESETS.iter().find(|p| p.id.eq_ignore_ascii_case(id))
}

/// Check a user supplied stream URL.
///
/// # Errors
///
/// Returns `StudyError::InvalidInput` if the URL is blank or not http(s).
pub fn validate_custom_url(url: &str) -> Result<String, StudyError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(StudyError::InvalidInput(
            "Please enter a valid URL".to_string(),
        ));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(StudyError::InvalidInput(format!(
            "Unsupported URL '{url}': expected http:// or https://"
        )));
    }
    Ok(url.to_string())
}

/// Check a volume level.
///
/// # Errors
///
/// Returns `StudyError::InvalidInput` above [`MAX_VOLUME`].
pub fn validate_volume(volume: u8) -> Result<u8, StudyError> {
    if volume > MAX_VOLUME {
        return Err(StudyError::InvalidInput(format!(
            "Invalid volume: {volume} (must be between 0 and {MAX_VOLUME})"
        )));
    }
    Ok(volume)
}

/// What the player has loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Track {
    Preset { index: usize },
    Custom { url: String },
}

impl Track {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Preset { index } => PRESETS.get(*index).map_or("Unknown", |p| p.name),
            Self::Custom { .. } => "Custom Track",
        }
    }

    #[must_use]
    pub fn emoji(&self) -> &str {
        match self {
            Self::Preset { index } => PRESETS.get(*index).map_or("🎵", |p| p.emoji),
            Self::Custom { .. } => "🎵",
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Preset { index } => PRESETS.get(*index).map_or("", |p| p.url),
            Self::Custom { url } => url,
        }
    }
}

/// Player state: loaded track, play flag and volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MusicPlayer {
    track: Track,
    playing: bool,
    volume: u8,
}

impl Default for MusicPlayer {
    fn default() -> Self {
        Self {
            track: Track::Preset { index: 0 },
            playing: false,
            volume: DEFAULT_VOLUME,
        }
    }
}

impl MusicPlayer {
    /// Restore a player from saved settings.
    ///
    /// A custom URL wins over the preset. Unknown presets fall back to the first one.
    #[must_use]
    pub fn from_settings(preset: &str, custom_url: Option<&str>, volume: u8) -> Self {
        let track = custom_url
            .and_then(|u| validate_custom_url(u).ok())
            .map(|url| Track::Custom { url })
            .unwrap_or_else(|| Track::Preset {
                index: PRESETS
                    .iter()
                    .position(|p| p.id.eq_ignore_ascii_case(preset))
                    .unwrap_or(0),
            });

        Self {
            track,
            playing: false,
            volume: volume.min(MAX_VOLUME),
        }
    }

    #[must_use]
    pub const fn track(&self) -> &Track {
        &self.track
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub const fn volume(&self) -> u8 {
        self.volume
    }

    /// Flip between playing and paused. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Load a preset by id. Loading a track stops playback.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::NotFound` for an unknown id.
    pub fn select_preset(&mut self, id: &str) -> Result<(), StudyError> {
        let index = PRESETS
            .iter()
            .position(|p| p.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| StudyError::NotFound(format!("music preset '{id}'")))?;
        self.load(Track::Preset { index });
        Ok(())
    }

    /// Load a custom stream URL.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::InvalidInput` for a blank or non-http(s) URL.
    pub fn set_custom_url(&mut self, url: &str) -> Result<(), StudyError> {
        let url = validate_custom_url(url)?;
        self.load(Track::Custom { url });
        Ok(())
    }

    /// Move to the next preset, wrapping around. A custom track moves to the first preset.
    pub fn next_track(&mut self) {
        let index = match self.track {
            Track::Preset { index } => (index + 1) % PRESETS.len(),
            Track::Custom { .. } => 0,
        };
        self.load(Track::Preset { index });
    }

    /// # Errors
    ///
    /// Returns `StudyError::InvalidInput` above [`MAX_VOLUME`]; the old volume is kept.
    pub fn set_volume(&mut self, volume: u8) -> Result<(), StudyError> {
        self.volume = validate_volume(volume)?;
        Ok(())
    }

    fn load(&mut self, track: Track) {
        tracing::debug!(track = track.name(), "loaded track");
        self.track = track;
        self.playing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_player() {
        let player = MusicPlayer::default();
        assert_eq!(player.track().name(), "Lo-Fi Study Beats");
        assert_eq!(player.volume(), 70);
        assert!(!player.is_playing());
    }

    #[test]
    fn test_find_preset() {
        assert_eq!(find_preset("rain").map(|p| p.name), Some("Rain Sounds"));
        assert_eq!(find_preset("CAFE").map(|p| p.emoji), Some("☕"));
        assert!(find_preset("jazz").is_none());
    }

    #[test]
    fn test_select_preset_stops_playback() {
        let mut player = MusicPlayer::default();
        player.toggle();
        player.select_preset("white-noise").unwrap();
        assert_eq!(player.track().name(), "White Noise");
        assert!(!player.is_playing());
    }

    #[test]
    fn test_select_unknown_preset() {
        let mut player = MusicPlayer::default();
        let err = player.select_preset("jazz").unwrap_err();
        assert!(matches!(err, StudyError::NotFound(_)));
        assert_eq!(player.track(), &Track::Preset { index: 0 });
    }

    #[test]
    fn test_next_track_wraps() {
        let mut player = MusicPlayer::default();
        for _ in 0..PRESETS.len() {
            player.next_track();
        }
        assert_eq!(player.track(), &Track::Preset { index: 0 });
    }

    #[test]
    fn test_custom_url() {
        let mut player = MusicPlayer::default();
        player
            .set_custom_url("  https://example.com/stream.mp3 ")
            .unwrap();
        assert_eq!(player.track().name(), "Custom Track");
        assert_eq!(player.track().url(), "https://example.com/stream.mp3");

        player.next_track();
        assert_eq!(player.track(), &Track::Preset { index: 0 });
    }

    #[test]
    fn test_custom_url_rejected() {
        let mut player = MusicPlayer::default();
        assert!(player.set_custom_url("   ").is_err());
        assert!(player.set_custom_url("ftp://example.com/a.mp3").is_err());
        assert_eq!(player.track(), &Track::Preset { index: 0 });
    }

    #[test]
    fn test_volume_bounds() {
        let mut player = MusicPlayer::default();
        player.set_volume(0).unwrap();
        assert_eq!(player.volume(), 0);
        assert!(player.set_volume(101).is_err());
        assert_eq!(player.volume(), 0);
    }

    #[test]
    fn test_from_settings() {
        let player = MusicPlayer::from_settings("cafe", None, 250);
        assert_eq!(player.track().name(), "Cafe Ambience");
        assert_eq!(player.volume(), 100);

        let player = MusicPlayer::from_settings("cafe", Some("https://x.test/a.mp3"), 40);
        assert_eq!(player.track().name(), "Custom Track");

        let player = MusicPlayer::from_settings("unknown", Some("not a url"), 40);
        assert_eq!(player.track().name(), "Lo-Fi Study Beats");
    }
}
