//! Service layer between the controllers and the bot backend.
//!
//! - `proxy` - Rewrites `/api-proxy/*` onto the backend origin and relays responses
//! - `bot_info` - Fetches and caches the bot's display identity

pub mod bot_info;
pub mod proxy;
