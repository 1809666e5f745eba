use axum::{
    extract::{OriginalUri, RawQuery, State},
    response::IntoResponse,
};

use crate::server::{
    error::AppError,
    service::proxy::{backend_path, ProxyService},
    state::AppState,
};

/// GET /api-proxy/{*path} - forwards the request to the bot backend.
///
/// The path is taken from the raw request URI rather than the decoded route
/// parameter, so escaped ids reach the backend as a single segment.
pub async fn forward(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let Some(path) = backend_path(uri.path()) else {
        return Err(AppError::BadRequest("Missing backend path".to_string()));
    };

    let proxy_service = ProxyService::new(&state);

    Ok(proxy_service.forward(path, query.as_deref()).await?)
}
