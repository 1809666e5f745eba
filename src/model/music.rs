use serde::{Deserialize, Serialize};

/// Network-wide playback aggregate from `/api/music-stats`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MusicStatsDto {
    pub top_tracks: Vec<TrackStatDto>,
    pub recent_tracks: Vec<TrackStatDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackStatDto {
    pub title: String,
    pub author: String,
    pub thumbnail: Option<String>,
    pub count: u64,
    pub is_playing: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_partial_aggregate() {
        let stats: MusicStatsDto = serde_json::from_str(
            r#"{"topTracks": [{"title": "A", "author": "B", "count": 7}]}"#,
        )
        .unwrap();

        assert_eq!(stats.top_tracks[0].count, 7);
        assert!(!stats.top_tracks[0].is_playing);
        assert!(stats.recent_tracks.is_empty());
    }
}
