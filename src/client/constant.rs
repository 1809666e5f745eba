pub const SITE_NAME: &str = "Flixo";

pub const SITE_DESCRIPTION: &str =
    "The premium, high-quality music companion for your Discord server. Designed with elegance.";

pub const INVITE_URL: &str = "https://discord.com/api/oauth2/authorize?client_id=1380994881731952741&permissions=8&scope=bot%20applications.commands";

pub const SUPPORT_URL: &str = "https://discord.gg/Zx6C6VN5Rk";

/// Home page carousel auto-advance.
pub const CAROUSEL_INTERVAL_MS: u32 = 3_500;

/// Live page session and aggregate refresh.
pub const LIVE_POLL_INTERVAL_MS: u32 = 5_000;

/// Status page refresh.
pub const STATUS_POLL_INTERVAL_MS: u32 = 10_000;

/// How long the "copied" tick stays on a command card.
pub const COPY_FEEDBACK_MS: u32 = 2_000;
