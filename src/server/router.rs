use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::server::{
    controller::{bot::get_bot_info, proxy::forward},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/bot", get(get_bot_info))
        .route("/api-proxy/{*path}", get(forward))
        .layer(TraceLayer::new_for_http())
}
