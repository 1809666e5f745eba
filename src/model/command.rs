use serde::{Deserialize, Serialize};

/// Bucket for commands the backend did not categorise.
pub const DEFAULT_CATEGORY: &str = "misc";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CommandDto {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl CommandDto {
    pub fn category(&self) -> &str {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Slash invocation copied to the clipboard.
    pub fn invocation(&self) -> String {
        format!("/{}", self.name)
    }
}

/// Body of `/api/commands`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CommandListDto {
    pub commands: Vec<CommandDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_category_falls_back_to_misc() {
        let list: CommandListDto = serde_json::from_str(
            r#"{"commands": [{"name": "ping"}, {"name": "play", "category": "music"}]}"#,
        )
        .unwrap();

        assert_eq!(list.commands[0].category(), "misc");
        assert_eq!(list.commands[0].description(), "");
        assert_eq!(list.commands[1].category(), "music");
        assert_eq!(list.commands[1].invocation(), "/play");
    }
}
