use crate::{
    client::{
        api::helper::{get_json, proxied, segment},
        model::{error::ApiError, tracker::Lookup},
    },
    model::player::PlayerSessionDto,
};

/// Session of the guild with the given id.
pub async fn get_guild_player(guild_id: &str) -> Result<PlayerSessionDto, ApiError> {
    let url = proxied(&format!("/api/player/{}", segment(guild_id)));
    get_json(&url).await
}

/// Session the given user is currently listening in.
pub async fn get_user_player(user_id: &str) -> Result<PlayerSessionDto, ApiError> {
    let url = proxied(&format!("/api/user-player/{}", segment(user_id)));
    get_json(&url).await
}

/// Runs the lookup a tracker asks for.
pub async fn run_lookup(lookup: &Lookup) -> Result<PlayerSessionDto, ApiError> {
    match lookup {
        Lookup::Guild(id) => get_guild_player(id).await,
        Lookup::User(id) => get_user_player(id).await,
    }
}
