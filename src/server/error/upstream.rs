use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures talking to the bot backend.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Backend answered with a non-success status.
    ///
    /// The status is passed on to the caller unchanged.
    #[error("Bot API responded with status {0}")]
    Status(StatusCode),

    /// Backend could not be reached (DNS, connect, timeout).
    ///
    /// Results in a 502 Bad Gateway response.
    #[error("Bot API is unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// Backend answered with a body that is not JSON.
    ///
    /// Results in a 502 Bad Gateway response.
    #[error("Bot API returned an invalid body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Converts upstream errors into HTTP responses.
///
/// - `Status` → the upstream status with "Failed to fetch from Bot API"
/// - `Unreachable` / `InvalidBody` → 502 Bad Gateway
///
/// Details are logged; the client only sees a generic message.
impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        let (status, message) = match self {
            Self::Status(status) => (status, "Failed to fetch from Bot API"),
            Self::Unreachable(_) => (StatusCode::BAD_GATEWAY, "Bot API is unreachable"),
            Self::InvalidBody(_) => (
                StatusCode::BAD_GATEWAY,
                "Bot API returned an invalid response",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_upstream_status_through() {
        let response = UpstreamError::Status(StatusCode::SERVICE_UNAVAILABLE).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn invalid_body_is_bad_gateway() {
        let err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let response = UpstreamError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
