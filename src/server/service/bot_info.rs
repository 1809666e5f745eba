//! Cached relay for the bot's display identity.
//!
//! Every page load asks `/api/bot` for the bot's name and avatar. The answer
//! rarely changes, so the last successful `/api/bot-info` body is kept in memory
//! for a short window and served without touching the backend.

use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use dioxus_logger::tracing;

use crate::server::{
    error::{upstream::UpstreamError, AppError},
    service::proxy::ProxyRule,
    state::AppState,
};

/// Backend path of the identity endpoint.
const BOT_INFO_PATH: &str = "api/bot-info";

/// Stored response body with expiration timestamp.
#[derive(Clone)]
struct CachedBotInfo {
    body: Value,
    expires_at: Instant,
}

impl CachedBotInfo {
    fn new(body: Value, ttl: Duration) -> Self {
        Self {
            body,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory cache holding at most one `/api/bot-info` body.
///
/// Cloning shares the underlying entry, so the cache can live in `AppState`.
/// Only successful responses are stored; failures always go back upstream on
/// the next request.
#[derive(Clone)]
pub struct BotInfoCache {
    entry: Arc<RwLock<Option<CachedBotInfo>>>,
    ttl: Duration,
}

impl BotInfoCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entry: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Returns the cached body if it has not expired.
    ///
    /// An expired entry is dropped on the way out.
    pub async fn get(&self) -> Option<Value> {
        {
            let entry = self.entry.read().await;
            match entry.as_ref() {
                Some(cached) if !cached.is_expired() => return Some(cached.body.clone()),
                Some(_) => (),
                None => return None,
            }
        }

        let mut entry = self.entry.write().await;
        if entry.as_ref().is_some_and(CachedBotInfo::is_expired) {
            *entry = None;
        }
        None
    }

    /// Replaces the cached body and restarts the window.
    pub async fn store(&self, body: Value) {
        *self.entry.write().await = Some(CachedBotInfo::new(body, self.ttl));
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.entry.read().await.is_none()
    }
}

pub struct BotInfoService<'a> {
    http_client: &'a reqwest::Client,
    rule: &'a ProxyRule,
    cache: &'a BotInfoCache,
}

impl<'a> BotInfoService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            http_client: &state.http_client,
            rule: &state.proxy_rule,
            cache: &state.bot_info_cache,
        }
    }

    /// Gets the bot identity, from cache when fresh.
    ///
    /// # Returns
    /// - `Ok(Value)` - The backend's JSON body
    /// - `Err(AppError::UpstreamErr)` - Backend answered with a non-success status or non-JSON body
    /// - `Err(AppError::ReqwestErr)` - Backend could not be reached
    pub async fn get(&self) -> Result<Value, AppError> {
        if let Some(body) = self.cache.get().await {
            return Ok(body);
        }

        let url = self.rule.target(BOT_INFO_PATH, None);
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status).into());
        }

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes).map_err(UpstreamError::from)?;

        tracing::debug!("Refreshed cached bot info");
        self.cache.store(body.clone()).await;

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::time::sleep;

    /// Tests that an empty cache yields nothing.
    #[tokio::test]
    async fn empty_cache_misses() {
        let cache = BotInfoCache::new(Duration::from_secs(60));
        assert!(cache.get().await.is_none());
    }

    /// Tests serving a stored body within the window.
    ///
    /// Expected: same body returned on repeated reads
    #[tokio::test]
    async fn serves_stored_body() {
        let cache = BotInfoCache::new(Duration::from_secs(60));
        let body = json!({"username": "Flixo", "avatarUrl": "https://cdn/a.png"});

        cache.store(body.clone()).await;

        assert_eq!(cache.get().await, Some(body.clone()));
        assert_eq!(cache.get().await, Some(body));
    }

    /// Tests that clones share one entry.
    #[tokio::test]
    async fn clones_share_entry() {
        let cache = BotInfoCache::new(Duration::from_secs(60));
        let handle = cache.clone();

        handle.store(json!({"username": "Flixo"})).await;

        assert!(cache.get().await.is_some());
    }

    /// Tests expiry after the window.
    ///
    /// Expected: miss after the TTL, entry cleared
    #[tokio::test]
    async fn expires_after_ttl() {
        let cache = BotInfoCache::new(Duration::from_millis(20));
        cache.store(json!({"username": "Flixo"})).await;

        sleep(Duration::from_millis(40)).await;

        assert!(cache.get().await.is_none());
        assert!(cache.is_empty().await);
    }

    /// Tests that storing again restarts the window.
    #[tokio::test]
    async fn store_replaces_body() {
        let cache = BotInfoCache::new(Duration::from_secs(60));
        cache.store(json!({"username": "Old"})).await;
        cache.store(json!({"username": "New"})).await;

        assert_eq!(cache.get().await, Some(json!({"username": "New"})));
    }
}
