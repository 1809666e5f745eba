use crate::{
    client::{api::helper::get_json, model::error::ApiError},
    model::bot::BotMetaDto,
};

/// Bot identity from the local relay, which caches `/api/bot-info`.
pub async fn get_bot_meta() -> Result<BotMetaDto, ApiError> {
    get_json("/api/bot").await
}
