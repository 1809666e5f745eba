use dioxus_logger::tracing;

use crate::{
    client::{
        api::helper::{get_json, proxied, segment},
        model::{error::ApiError, leaderboard::LEADERBOARD_SIZE},
    },
    model::guild::{GuildIdsDto, GuildSummaryDto, TopServersDto},
};

/// Ranked guilds in one request, largest first.
pub async fn get_top_servers() -> Result<Vec<GuildSummaryDto>, ApiError> {
    let top: TopServersDto = get_json(&proxied("/api/top-servers")).await?;
    Ok(top.servers)
}

pub async fn get_guild(guild_id: &str) -> Result<GuildSummaryDto, ApiError> {
    let url = proxied(&format!("/api/guild/{}", segment(guild_id)));
    get_json(&url).await
}

/// Ranked guilds resolved one by one from `/api/guilds`.
///
/// The first [`LEADERBOARD_SIZE`] ids are looked up concurrently; guilds whose
/// lookup fails are left out rather than failing the whole list.
pub async fn get_ranked_guilds() -> Result<Vec<GuildSummaryDto>, ApiError> {
    let ids: GuildIdsDto = get_json(&proxied("/api/guilds")).await?;

    let lookups = ids
        .guild_ids
        .iter()
        .take(LEADERBOARD_SIZE)
        .map(|id| get_guild(id));

    let guilds = futures_util::future::join_all(lookups)
        .await
        .into_iter()
        .filter_map(|result| match result {
            Ok(guild) => Some(guild),
            Err(err) => {
                tracing::warn!("Dropping guild from leaderboard: {}", err);
                None
            }
        })
        .collect();

    Ok(guilds)
}
