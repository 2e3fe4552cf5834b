//! JSON output formatting for studyflow.

use serde::Serialize;
use serde_json::json;

use crate::error::StudyError;
use crate::features::music::{MusicPlayer, PRESETS};
use crate::features::progress::SessionRecord;

/// Format the session log as JSON
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn format_history_json(records: &[SessionRecord]) -> Result<String, StudyError> {
    let output = json!({
        "count": records.len(),
        "items": records
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the music catalog as JSON
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn format_music_json(player: &MusicPlayer) -> Result<String, StudyError> {
    let output = json!({
        "current": {
            "name": player.track().name(),
            "url": player.track().url(),
        },
        "volume": player.volume(),
        "presets": PRESETS,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `StudyError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, StudyError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_history_json() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 10, 9, 30, 0).unwrap();
        let records = [SessionRecord::focus(25, ts)];
        let out = format_history_json(&records).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["durationMinutes"], 25);
        assert_eq!(value["items"][0]["type"], "focus");
    }

    #[test]
    fn test_music_json() {
        let out = format_music_json(&MusicPlayer::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["current"]["name"], "Lo-Fi Study Beats");
        assert_eq!(value["volume"], 70);
        assert_eq!(value["presets"].as_array().map(Vec::len), Some(4));
    }
}
