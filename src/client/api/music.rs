use crate::{
    client::{
        api::helper::{get_json, proxied},
        model::error::ApiError,
    },
    model::music::MusicStatsDto,
};

pub async fn get_music_stats() -> Result<MusicStatsDto, ApiError> {
    get_json(&proxied("/api/music-stats")).await
}
