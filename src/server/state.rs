//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. It holds:
//! - HTTP client for requests to the bot backend
//! - Proxy rule mapping local paths onto the backend origin
//! - Cache for the bot's display identity

use crate::server::{
    config::Config,
    service::{bot_info::BotInfoCache, proxy::ProxyRule},
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `reqwest::Client` uses an `Arc` internally
/// - `ProxyRule` holds a single parsed URL
/// - `BotInfoCache` shares its entry through an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// HTTP client for backend requests.
    ///
    /// Configured without redirect following so the proxy never leaves the
    /// configured backend host.
    pub http_client: reqwest::Client,

    /// Rewrite from `/api-proxy/*` onto the backend origin.
    pub proxy_rule: ProxyRule,

    /// Short-lived cache in front of `/api/bot-info`.
    pub bot_info_cache: BotInfoCache,
}

impl AppState {
    /// Creates a new application state from the outbound client and configuration.
    pub fn new(http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            http_client,
            proxy_rule: ProxyRule::new(config.bot_api_url.clone()),
            bot_info_cache: BotInfoCache::new(config.bot_info_cache_ttl),
        }
    }
}
