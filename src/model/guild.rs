use serde::{Deserialize, Serialize};

/// One entry of the guild leaderboard. Position in the list is the rank.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GuildSummaryDto {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub member_count: u64,
}

impl GuildSummaryDto {
    /// First character of the name, shown in place of a missing icon.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    pub fn channel_url(&self) -> String {
        format!("https://discord.com/channels/{}", self.id)
    }
}

/// Body of `/api/top-servers`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TopServersDto {
    pub servers: Vec<GuildSummaryDto>,
}

/// Body of `/api/guilds`, ids ordered by member count descending.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GuildIdsDto {
    pub guild_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_top_servers() {
        let body = r#"{"servers": [
            {"id": "1", "name": "Lofi Lounge", "icon": "https://cdn/x.png", "memberCount": 52000},
            {"id": "2", "name": "", "memberCount": 10}
        ]}"#;
        let top: TopServersDto = serde_json::from_str(body).unwrap();

        assert_eq!(top.servers.len(), 2);
        assert_eq!(top.servers[0].member_count, 52_000);
        assert_eq!(top.servers[0].initial(), 'L');
        assert_eq!(top.servers[1].icon, None);
        assert_eq!(top.servers[1].initial(), '?');
    }

    #[test]
    fn missing_servers_field_is_empty() {
        let top: TopServersDto = serde_json::from_str("{}").unwrap();
        assert!(top.servers.is_empty());
    }
}
