//! Cross-game aggregate for a user.

use std::collections::HashSet;

/// One per-game row of a user, as the aggregate sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameTotal<'a> {
    pub game_id: &'a str,
    pub total_score: i64,
    pub hands_played: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub total_games: i32,
    pub total_hands_played: i32,
    pub best_score: Option<i64>,
    pub worst_score: Option<i64>,
    pub average_score: Option<f64>,
}

/// Distinct games, summed hands, and best/worst/mean per-game total.
/// Extremes and mean are `None` without rows.
pub fn summarize(rows: &[GameTotal<'_>]) -> StatsSummary {
    let games: HashSet<&str> = rows.iter().map(|r| r.game_id).collect();
    let hands: i64 = rows.iter().map(|r| i64::from(r.hands_played)).sum();
    let best_score = rows.iter().map(|r| r.total_score).max();
    let worst_score = rows.iter().map(|r| r.total_score).min();
    let average_score = if rows.is_empty() {
        None
    } else {
        let sum = rows
            .iter()
            .fold(0i64, |acc, r| acc.saturating_add(r.total_score));
        Some(sum as f64 / rows.len() as f64)
    };

    StatsSummary {
        total_games: clamp_count(games.len()),
        total_hands_played: clamp_count(hands),
        best_score,
        worst_score,
        average_score,
    }
}

/// Counts are stored as 32-bit columns; saturate rather than wrap.
fn clamp_count<T: TryInto<i32>>(n: T) -> i32 {
    n.try_into().unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rows_give_nulls() {
        let s = summarize(&[]);
        assert_eq!(s.total_games, 0);
        assert_eq!(s.total_hands_played, 0);
        assert_eq!(s.best_score, None);
        assert_eq!(s.worst_score, None);
        assert_eq!(s.average_score, None);
    }

    #[test]
    fn aggregates_across_games() {
        let rows = [
            GameTotal {
                game_id: "g1",
                total_score: 120,
                hands_played: 3,
            },
            GameTotal {
                game_id: "g2",
                total_score: -30,
                hands_played: 2,
            },
            GameTotal {
                game_id: "g3",
                total_score: 0,
                hands_played: 0,
            },
        ];
        let s = summarize(&rows);
        assert_eq!(s.total_games, 3);
        assert_eq!(s.total_hands_played, 5);
        assert_eq!(s.best_score, Some(120));
        assert_eq!(s.worst_score, Some(-30));
        assert_eq!(s.average_score, Some(30.0));
    }

    #[test]
    fn hand_count_saturates_instead_of_overflowing() {
        let rows = [
            GameTotal {
                game_id: "g1",
                total_score: 1,
                hands_played: i32::MAX,
            },
            GameTotal {
                game_id: "g2",
                total_score: 1,
                hands_played: 10,
            },
        ];
        let s = summarize(&rows);
        assert_eq!(s.total_games, 2);
        assert_eq!(s.total_hands_played, i32::MAX);
    }
}
