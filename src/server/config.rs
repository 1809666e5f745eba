use std::time::Duration;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

/// Backend used when `BOT_API_URL` is unset.
pub const DEFAULT_BOT_API_URL: &str = "http://miami.vexanode.cloud:2009";

const DEFAULT_BOT_INFO_CACHE_SECS: u64 = 60;

const BOT_API_URL_VAR: &str = "BOT_API_URL";
const BOT_INFO_CACHE_SECS_VAR: &str = "BOT_INFO_CACHE_SECS";

pub struct Config {
    /// Origin of the bot backend every proxied request is sent to.
    pub bot_api_url: Url,
    /// How long a `/api/bot-info` response is served from memory.
    pub bot_info_cache_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_vars(
            std::env::var(BOT_API_URL_VAR).ok(),
            std::env::var(BOT_INFO_CACHE_SECS_VAR).ok(),
        )?)
    }

    /// Builds the configuration from raw variable values.
    ///
    /// Empty values count as unset.
    fn from_vars(
        bot_api_url: Option<String>,
        bot_info_cache_secs: Option<String>,
    ) -> Result<Self, ConfigError> {
        let bot_api_url = bot_api_url
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BOT_API_URL.to_string());

        let bot_info_cache_secs = match bot_info_cache_secs.filter(|v| !v.trim().is_empty()) {
            Some(value) => {
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidNumber {
                        var: BOT_INFO_CACHE_SECS_VAR,
                        value,
                    })?
            }
            None => DEFAULT_BOT_INFO_CACHE_SECS,
        };

        Ok(Self {
            bot_api_url: parse_origin(bot_api_url.trim())?,
            bot_info_cache_ttl: Duration::from_secs(bot_info_cache_secs),
        })
    }
}

fn parse_origin(value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        var: BOT_API_URL_VAR,
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() || url.host().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests defaults when no variables are set.
    ///
    /// Expected: fallback backend origin and a 60 second cache window
    #[test]
    fn uses_defaults_when_unset() {
        let config = Config::from_vars(None, None).unwrap();

        assert_eq!(config.bot_api_url.as_str(), "http://miami.vexanode.cloud:2009/");
        assert_eq!(config.bot_info_cache_ttl, Duration::from_secs(60));
    }

    /// Tests that empty values fall back the same way as unset ones.
    #[test]
    fn treats_empty_values_as_unset() {
        let config = Config::from_vars(Some("  ".to_string()), Some(String::new())).unwrap();

        assert_eq!(config.bot_api_url.host_str(), Some("miami.vexanode.cloud"));
        assert_eq!(config.bot_info_cache_ttl, Duration::from_secs(60));
    }

    #[test]
    fn reads_explicit_values() {
        let config = Config::from_vars(
            Some("https://bot.example.com/".to_string()),
            Some("15".to_string()),
        )
        .unwrap();

        assert_eq!(config.bot_api_url.as_str(), "https://bot.example.com/");
        assert_eq!(config.bot_info_cache_ttl, Duration::from_secs(15));
    }

    /// Tests rejection of origins the proxy could not forward to.
    ///
    /// Expected: Err(InvalidUrl) for relative, non-http and malformed values
    #[test]
    fn rejects_unusable_origins() {
        for value in ["localhost:2009", "ftp://bot.example.com", "http://", "mailto:a@b.c"] {
            let result = Config::from_vars(Some(value.to_string()), None);
            assert!(
                matches!(result, Err(ConfigError::InvalidUrl { .. })),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_numeric_cache_window() {
        let result = Config::from_vars(None, Some("a minute".to_string()));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidNumber { value, .. }) if value == "a minute"
        ));
    }
}
