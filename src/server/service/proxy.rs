//! Path-prefix rewrite from `/api-proxy/*` to the bot backend.
//!
//! The browser only ever talks to this origin; every `/api-proxy/<path>` request
//! is re-issued against `<BOT_API_URL>/<path>` with the same query string. Nothing
//! but the host (and an optional base path on the origin) is changed.

use axum::{
    body::{Body, Bytes},
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use url::Url;

use crate::server::{error::upstream::UpstreamError, state::AppState};

/// Local prefix stripped before forwarding.
pub const PROXY_PREFIX: &str = "/api-proxy";

/// Path after the proxy prefix, still percent-encoded as the browser sent it.
///
/// Escaped separators such as `%2F` stay escaped, so an id can never turn
/// into extra backend path segments.
pub fn backend_path(request_path: &str) -> Option<&str> {
    request_path
        .strip_prefix(PROXY_PREFIX)?
        .strip_prefix('/')
        .filter(|path| !path.trim_matches('/').is_empty())
}

/// Rewrites local proxy paths onto the backend origin.
#[derive(Clone, Debug)]
pub struct ProxyRule {
    origin: Url,
}

impl ProxyRule {
    pub fn new(origin: Url) -> Self {
        Self { origin }
    }

    /// Backend URL for a path relative to the proxy prefix.
    ///
    /// Any path already present on the origin is kept as a base, so an origin of
    /// `http://host/bot` maps `api/stats` to `http://host/bot/api/stats`.
    ///
    /// # Arguments
    /// - `path` - Path after the proxy prefix, with or without a leading slash
    /// - `query` - Raw query string without the leading `?`
    pub fn target(&self, path: &str, query: Option<&str>) -> Url {
        let mut target = self.origin.clone();
        let base = self.origin.path().trim_end_matches('/');
        target.set_path(&format!("{}/{}", base, path.trim_start_matches('/')));
        target.set_query(query.filter(|q| !q.is_empty()));
        target.set_fragment(None);
        target
    }
}

/// Backend response relayed verbatim to the browser.
pub struct ProxiedResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for ProxiedResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        if let Some(content_type) = self.content_type {
            response.headers_mut().insert(CONTENT_TYPE, content_type);
        }
        response
    }
}

pub struct ProxyService<'a> {
    http_client: &'a reqwest::Client,
    rule: &'a ProxyRule,
}

impl<'a> ProxyService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            http_client: &state.http_client,
            rule: &state.proxy_rule,
        }
    }

    /// Issues a GET against the backend and captures the response.
    ///
    /// Non-success statuses are not errors here; they are relayed like any other
    /// response so the page can decide what an empty or failed payload means.
    ///
    /// # Returns
    /// - `Ok(ProxiedResponse)` - Whatever the backend answered
    /// - `Err(UpstreamError::Unreachable)` - The backend could not be reached
    pub async fn forward(
        &self,
        path: &str,
        query: Option<&str>,
    ) -> Result<ProxiedResponse, UpstreamError> {
        let target = self.rule.target(path, query);
        tracing::debug!("Proxying {}/{} to {}", PROXY_PREFIX, path, target);

        let response = self
            .http_client
            .get(target)
            .send()
            .await
            .map_err(UpstreamError::Unreachable)?;

        let status = response.status();
        let content_type = response.headers().get(CONTENT_TYPE).cloned();
        let body = response
            .bytes()
            .await
            .map_err(UpstreamError::Unreachable)?;

        Ok(ProxiedResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(origin: &str) -> ProxyRule {
        ProxyRule::new(Url::parse(origin).unwrap())
    }

    /// Tests plain host substitution.
    ///
    /// Expected: path appended to the origin, query preserved
    #[test]
    fn substitutes_host() {
        let target = rule("http://miami.vexanode.cloud:2009").target("api/player/123", None);
        assert_eq!(
            target.as_str(),
            "http://miami.vexanode.cloud:2009/api/player/123"
        );

        let target = rule("https://bot.example.com").target("/api/stats", Some("shard=1&x=y"));
        assert_eq!(target.as_str(), "https://bot.example.com/api/stats?shard=1&x=y");
    }

    /// Tests that a base path on the origin is kept as a prefix.
    #[test]
    fn keeps_origin_base_path() {
        let with_slash = rule("http://host:8080/bot/").target("api/stats", None);
        let without_slash = rule("http://host:8080/bot").target("api/stats", None);

        assert_eq!(with_slash.as_str(), "http://host:8080/bot/api/stats");
        assert_eq!(without_slash.as_str(), "http://host:8080/bot/api/stats");
    }

    #[test]
    fn drops_empty_query_and_origin_query() {
        let target = rule("http://host/?token=1#frag").target("api/commands", Some(""));
        assert_eq!(target.as_str(), "http://host/api/commands");
    }

    #[test]
    fn strips_prefix_without_decoding() {
        assert_eq!(backend_path("/api-proxy/api/stats"), Some("api/stats"));
        assert_eq!(
            backend_path("/api-proxy/api/player/a%2Fb"),
            Some("api/player/a%2Fb")
        );
        assert_eq!(backend_path("/api-proxy/"), None);
        assert_eq!(backend_path("/api-proxy"), None);
        assert_eq!(backend_path("/other/api/stats"), None);
    }

    /// Tests an escaped id in the forwarded path.
    ///
    /// Expected: escapes survive, no extra segment and no query appear
    #[test]
    fn escaped_id_stays_one_segment() {
        let target = rule("http://host:2009").target("api/user-player/123%3Fx%2Fy", None);

        assert_eq!(target.path(), "/api/user-player/123%3Fx%2Fy");
        assert_eq!(target.query(), None);
    }

    #[test]
    fn never_changes_host() {
        let target = rule("http://host:2009").target("../../elsewhere/api", None);
        assert_eq!(target.host_str(), Some("host"));
        assert_eq!(target.port(), Some(2009));
    }

    #[test]
    fn relayed_response_keeps_status_and_type() {
        let response = ProxiedResponse {
            status: StatusCode::NOT_FOUND,
            content_type: Some(HeaderValue::from_static("application/json")),
            body: Bytes::from_static(br#"{"error":"Guild not found"}"#),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
