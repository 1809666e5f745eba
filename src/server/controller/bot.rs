use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::server::{error::AppError, service::bot_info::BotInfoService, state::AppState};

/// GET /api/bot - bot display identity relayed from `/api/bot-info`.
pub async fn get_bot_info(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let bot_info_service = BotInfoService::new(&state);

    let body = bot_info_service.get().await?;

    Ok((StatusCode::OK, Json(body)))
}
