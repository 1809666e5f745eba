use crate::{
    client::{
        api::helper::{get_json, proxied},
        model::error::ApiError,
    },
    model::stats::StatsDto,
};

pub async fn get_stats() -> Result<StatsDto, ApiError> {
    get_json(&proxied("/api/stats")).await
}
