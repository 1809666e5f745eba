use crate::model::guild::GuildSummaryDto;

/// Number of guilds shown on the leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;

/// Number of featured podium cards.
pub const PODIUM_SIZE: usize = 3;

/// Splits a ranked list into podium cards and the remaining rows, capped at
/// [`LEADERBOARD_SIZE`] entries overall.
pub fn split_podium(guilds: &[GuildSummaryDto]) -> (&[GuildSummaryDto], &[GuildSummaryDto]) {
    let shown = &guilds[..guilds.len().min(LEADERBOARD_SIZE)];
    shown.split_at(shown.len().min(PODIUM_SIZE))
}

/// Badge text for a zero-based rank.
pub fn rank_label(rank: usize) -> String {
    match rank {
        0 => "Top Server".to_string(),
        1 => "2nd Place".to_string(),
        2 => "3rd Place".to_string(),
        n => format!("Rank #{}", n + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guilds(count: usize) -> Vec<GuildSummaryDto> {
        (0..count)
            .map(|i| GuildSummaryDto {
                id: i.to_string(),
                name: format!("Guild {i}"),
                icon: None,
                member_count: (count - i) as u64 * 100,
            })
            .collect()
    }

    #[test]
    fn splits_top_three_from_rest() {
        let list = guilds(12);
        let (podium, rest) = split_podium(&list);

        assert_eq!(podium.len(), 3);
        assert_eq!(rest.len(), 7);
        assert_eq!(podium[0].id, "0");
        assert_eq!(rest[0].id, "3");
    }

    #[test]
    fn short_lists_fill_podium_first() {
        let list = guilds(2);
        let (podium, rest) = split_podium(&list);

        assert_eq!(podium.len(), 2);
        assert!(rest.is_empty());

        let (podium, rest) = split_podium(&[]);
        assert!(podium.is_empty() && rest.is_empty());
    }

    #[test]
    fn labels_ranks() {
        assert_eq!(rank_label(0), "Top Server");
        assert_eq!(rank_label(2), "3rd Place");
        assert_eq!(rank_label(3), "Rank #4");
    }
}
