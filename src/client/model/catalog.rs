use std::collections::BTreeSet;

use crate::model::command::CommandDto;

/// Category selection that matches every command.
pub const ALL_CATEGORIES: &str = "all";

/// Category tabs: `all` followed by the distinct categories, sorted.
pub fn categories(commands: &[CommandDto]) -> Vec<String> {
    let distinct: BTreeSet<&str> = commands.iter().map(CommandDto::category).collect();

    std::iter::once(ALL_CATEGORIES)
        .chain(distinct)
        .map(str::to_string)
        .collect()
}

/// Commands whose name or description contains `search` (case-insensitive)
/// and whose category equals `category`, unless `category` is `all`.
pub fn filter_commands<'a>(
    commands: &'a [CommandDto],
    search: &str,
    category: &str,
) -> Vec<&'a CommandDto> {
    let needle = search.to_lowercase();

    commands
        .iter()
        .filter(|command| {
            command.name.to_lowercase().contains(&needle)
                || command.description().to_lowercase().contains(&needle)
        })
        .filter(|command| category == ALL_CATEGORIES || command.category() == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(name: &str, description: Option<&str>, category: Option<&str>) -> CommandDto {
        CommandDto {
            name: name.to_string(),
            description: description.map(str::to_string),
            category: category.map(str::to_string),
        }
    }

    fn catalog() -> Vec<CommandDto> {
        vec![
            command("play", Some("Play a song or playlist"), Some("music")),
            command("ban", Some("Ban a member"), Some("mod")),
            command("skip", Some("Skip the current track"), Some("music")),
            command("ping", None, None),
        ]
    }

    fn names(commands: Vec<&CommandDto>) -> Vec<&str> {
        commands.into_iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn matches_name_prefix_in_all() {
        let commands = vec![
            command("play", None, Some("music")),
            command("ban", None, Some("mod")),
        ];

        assert_eq!(names(filter_commands(&commands, "pl", "all")), vec!["play"]);
    }

    #[test]
    fn matches_description_case_insensitively() {
        let commands = catalog();
        assert_eq!(
            names(filter_commands(&commands, "CURRENT TRACK", "all")),
            vec!["skip"]
        );
    }

    #[test]
    fn category_narrows_results() {
        let commands = catalog();

        assert_eq!(
            names(filter_commands(&commands, "", "music")),
            vec!["play", "skip"]
        );
        assert_eq!(names(filter_commands(&commands, "", "misc")), vec!["ping"]);
        assert!(filter_commands(&commands, "ban", "music").is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let commands = catalog();
        let first = filter_commands(&commands, "p", "music");
        let second = filter_commands(&commands, "p", "music");

        assert_eq!(first, second);
    }

    #[test]
    fn categories_are_sorted_after_all() {
        assert_eq!(categories(&catalog()), vec!["all", "misc", "mod", "music"]);
        assert_eq!(categories(&[]), vec!["all"]);
    }
}
