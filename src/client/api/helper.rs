use crate::{client::model::error::ApiError, model::api::ErrorDto};
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Local prefix rewritten to the bot backend by the server.
pub const API_PROXY: &str = "/api-proxy";

/// URL of a backend endpoint behind the proxy, e.g. `proxied("/api/stats")`.
pub fn proxied(path: &str) -> String {
    format!("{}{}", API_PROXY, path)
}

/// Escapes a user-supplied id for use as a single path segment, so `/`, `?`
/// or `#` in the input cannot change the backend path or query.
pub fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Helper function to parse API responses with consistent error handling
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response.json::<T>().await.map_err(|e| ApiError {
            status,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        let message = if let Ok(error_dto) = response.json::<ErrorDto>().await {
            error_dto.error
        } else {
            response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string())
        };

        Err(ApiError { status, message })
    }
}

/// Create a GET request
pub fn get(url: &str) -> Request {
    Request::get(url)
}

/// Send a request; failures to get any response are reported as network errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Failed to send request: {}", e)))
}

/// GET a JSON document
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = send_request(get(url)).await?;
    parse_response(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ids_are_unchanged() {
        assert_eq!(segment("1380026050104397825"), "1380026050104397825");
        assert_eq!(
            proxied(&format!("/api/player/{}", segment("42"))),
            "/api-proxy/api/player/42"
        );
    }

    #[test]
    fn separators_stay_inside_the_segment() {
        assert_eq!(segment("123?x"), "123%3Fx");
        assert_eq!(segment("a/b"), "a%2Fb");
        assert_eq!(segment("1#2 3"), "1%232%203");
    }
}
