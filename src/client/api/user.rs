use crate::{
    client::{
        api::helper::{get_json, proxied, segment},
        model::error::ApiError,
    },
    model::user::UserAvatarDto,
};

pub async fn get_user_avatar(discord_id: &str) -> Result<UserAvatarDto, ApiError> {
    let url = proxied(&format!("/api/user/{}", segment(discord_id)));
    get_json(&url).await
}
