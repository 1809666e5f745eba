use serde::{Deserialize, Serialize};

/// Display identity of the bot as returned by `/api/bot-info`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BotMetaDto {
    pub username: Option<String>,
    pub avatar_url: Option<String>,
}

impl BotMetaDto {
    /// Name to display, falling back to `fallback` while unknown.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.username
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(fallback)
    }
}
