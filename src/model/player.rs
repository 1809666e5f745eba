use serde::{Deserialize, Serialize};

/// Playback session as returned by `/api/player/{guild}` and
/// `/api/user-player/{user}`.
///
/// The backend answers with a zeroed body rather than 404 when nothing is
/// playing, so presence of a body says nothing; see [`is_active`].
///
/// [`is_active`]: PlayerSessionDto::is_active
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerSessionDto {
    pub is_connected: bool,
    pub is_playing: bool,
    pub current_track: Option<CurrentTrackDto>,
    /// Playback position in milliseconds.
    pub position: u64,
    /// Older backends report the duration beside the position instead of on the track.
    pub duration: Option<u64>,
    pub volume: u32,
    pub member_count: u64,
    pub guild_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CurrentTrackDto {
    pub title: String,
    pub author: String,
    pub thumbnail: Option<String>,
    /// Track length in milliseconds.
    pub duration: u64,
}

impl PlayerSessionDto {
    pub fn is_active(&self) -> bool {
        self.is_connected || self.is_playing || self.current_track.is_some()
    }

    pub fn duration_ms(&self) -> u64 {
        match &self.current_track {
            Some(track) if track.duration > 0 => track.duration,
            _ => self.duration.unwrap_or_default(),
        }
    }

    /// Share of the track already played, clamped to `0.0..=100.0`.
    pub fn progress_percent(&self) -> f64 {
        let duration = self.duration_ms();
        if duration == 0 {
            return 0.0;
        }
        (self.position as f64 / duration as f64 * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_body_is_inactive() {
        let session: PlayerSessionDto =
            serde_json::from_str(r#"{"isConnected": false, "isPlaying": false}"#).unwrap();
        assert!(!session.is_active());

        let error_body: PlayerSessionDto =
            serde_json::from_str(r#"{"error": "Guild not found"}"#).unwrap();
        assert!(!error_body.is_active());
    }

    #[test]
    fn any_signal_marks_session_active() {
        let connected = PlayerSessionDto {
            is_connected: true,
            ..Default::default()
        };
        let with_track = PlayerSessionDto {
            current_track: Some(CurrentTrackDto::default()),
            ..Default::default()
        };
        assert!(connected.is_active());
        assert!(with_track.is_active());
    }

    #[test]
    fn progress_uses_track_duration_then_top_level() {
        let mut session: PlayerSessionDto = serde_json::from_str(
            r#"{"isPlaying": true, "position": 30000, "duration": 120000,
                "currentTrack": {"title": "Song", "author": "Band", "duration": 60000}}"#,
        )
        .unwrap();
        assert_eq!(session.duration_ms(), 60_000);
        assert_eq!(session.progress_percent(), 50.0);

        session.current_track.as_mut().unwrap().duration = 0;
        assert_eq!(session.duration_ms(), 120_000);
        assert_eq!(session.progress_percent(), 25.0);
    }

    #[test]
    fn progress_is_clamped() {
        let session = PlayerSessionDto {
            position: 90_000,
            duration: Some(60_000),
            ..Default::default()
        };
        assert_eq!(session.progress_percent(), 100.0);
        assert_eq!(PlayerSessionDto::default().progress_percent(), 0.0);
    }
}
