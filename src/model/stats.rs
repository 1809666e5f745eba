use serde::{Deserialize, Serialize};

/// Aggregate counters from `/api/stats`.
///
/// `shards` is optional on the wire; single-process deployments of the bot
/// omit it entirely. Use [`StatsDto::shards_or_implicit`] when rendering.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct StatsDto {
    pub servers: u64,
    pub users: u64,
    pub commands: u64,
    pub ping: i64,
    /// Process uptime in seconds.
    pub uptime: f64,
    pub players: u64,
    pub shards: Option<Vec<ShardDto>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ShardDto {
    pub id: u32,
    pub ping: i64,
    pub servers: u64,
    pub users: u64,
    pub status: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShardStatus {
    Online,
    Connecting,
    Offline,
}

impl ShardStatus {
    pub fn label(self) -> &'static str {
        match self {
            ShardStatus::Online => "Online",
            ShardStatus::Connecting => "Connecting",
            ShardStatus::Offline => "Offline",
        }
    }
}

impl From<i64> for ShardStatus {
    fn from(code: i64) -> Self {
        match code {
            0 => ShardStatus::Online,
            1 => ShardStatus::Connecting,
            _ => ShardStatus::Offline,
        }
    }
}

impl ShardDto {
    pub fn status(&self) -> ShardStatus {
        ShardStatus::from(self.status)
    }
}

impl StatsDto {
    /// Shards reported by the backend, or a single online shard built from
    /// the aggregate counters when the field is absent.
    pub fn shards_or_implicit(&self) -> Vec<ShardDto> {
        match &self.shards {
            Some(shards) => shards.clone(),
            None => vec![ShardDto {
                id: 0,
                ping: self.ping,
                servers: self.servers,
                users: self.users,
                status: 0,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Missing shard list synthesizes exactly one shard from the aggregate.
    #[test]
    fn synthesizes_implicit_shard() {
        let stats: StatsDto =
            serde_json::from_str(r#"{"servers": 12, "users": 3400, "ping": 42}"#).unwrap();

        let shards = stats.shards_or_implicit();

        assert_eq!(shards.len(), 1);
        assert_eq!(shards[0].id, 0);
        assert_eq!(shards[0].ping, 42);
        assert_eq!(shards[0].servers, 12);
        assert_eq!(shards[0].users, 3400);
        assert_eq!(shards[0].status(), ShardStatus::Online);
    }

    /// Reported shards are used as-is, including an explicitly empty list.
    #[test]
    fn keeps_reported_shards() {
        let stats: StatsDto = serde_json::from_str(
            r#"{"servers": 2, "shards": [{"id": 0, "status": 0}, {"id": 1, "status": 5}]}"#,
        )
        .unwrap();
        let shards = stats.shards_or_implicit();
        assert_eq!(shards.len(), 2);
        assert_eq!(shards[1].status(), ShardStatus::Offline);

        let empty: StatsDto = serde_json::from_str(r#"{"shards": []}"#).unwrap();
        assert!(empty.shards_or_implicit().is_empty());
    }

    #[test]
    fn decodes_fractional_uptime() {
        let stats: StatsDto = serde_json::from_str(r#"{"uptime": 3723.52}"#).unwrap();
        assert_eq!(stats.uptime, 3723.52);
        assert_eq!(stats.commands, 0);
    }

    #[test]
    fn maps_shard_status_codes() {
        assert_eq!(ShardStatus::from(0), ShardStatus::Online);
        assert_eq!(ShardStatus::from(1), ShardStatus::Connecting);
        assert_eq!(ShardStatus::from(-1), ShardStatus::Offline);
        assert_eq!(ShardStatus::Connecting.label(), "Connecting");
    }
}
