//! Input rules for games and hands.

use crate::domain::{MAX_PLAYERS, MIN_PLAYERS};
use crate::errors::domain::{DomainError, ValidationKind};

pub fn validate_new_game(player_names: &[String], initial_dealer_name: &str) -> Result<(), DomainError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_names.len()) {
        return Err(DomainError::validation(
            ValidationKind::PlayerCount,
            "Game must have 2-4 players",
        ));
    }
    if !player_names.iter().any(|n| n == initial_dealer_name) {
        return Err(DomainError::validation(
            ValidationKind::InitialDealer,
            "Initial dealer must be one of the players",
        ));
    }
    Ok(())
}

/// An explicit dealer for a new hand. Absent or `0` means "pick the next one".
pub fn requested_dealer(dealer_player_id: Option<i64>) -> Option<i64> {
    dealer_player_id.filter(|&id| id != 0)
}

pub fn validate_dealer(player_ids: &[i64], dealer_player_id: i64) -> Result<(), DomainError> {
    if player_ids.contains(&dealer_player_id) {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidDealer,
            "Invalid dealer player",
        ))
    }
}

/// Scores must cover every seat: same count and every seat present.
pub fn validate_score_set(player_ids: &[i64], score_player_ids: &[i64]) -> Result<(), DomainError> {
    let complete = player_ids.len() == score_player_ids.len()
        && player_ids.iter().all(|id| score_player_ids.contains(id));
    if complete {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::IncompleteScores,
            "Scores must be provided for all players",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn player_count_bounds() {
        assert!(validate_new_game(&names(&["A", "B"]), "A").is_ok());
        assert!(validate_new_game(&names(&["A", "B", "C", "D"]), "D").is_ok());

        for bad in [names(&["A"]), names(&["A", "B", "C", "D", "E"]), vec![]] {
            let err = validate_new_game(&bad, "A").unwrap_err();
            assert_eq!(
                err,
                DomainError::validation(ValidationKind::PlayerCount, "Game must have 2-4 players")
            );
        }
    }

    #[test]
    fn dealer_must_be_named() {
        let err = validate_new_game(&names(&["Alice", "Bob"]), "Carol").unwrap_err();
        assert_eq!(err.detail(), "Initial dealer must be one of the players");
    }

    #[test]
    fn zero_dealer_means_auto() {
        assert_eq!(requested_dealer(None), None);
        assert_eq!(requested_dealer(Some(0)), None);
        assert_eq!(requested_dealer(Some(7)), Some(7));
    }

    #[test]
    fn dealer_must_be_seated() {
        assert!(validate_dealer(&[1, 2, 3], 2).is_ok());
        let err = validate_dealer(&[1, 2, 3], 9).unwrap_err();
        assert_eq!(err.detail(), "Invalid dealer player");
    }

    #[test]
    fn score_set_must_match_seats() {
        assert!(validate_score_set(&[1, 2, 3], &[3, 1, 2]).is_ok());

        for bad in [vec![1, 2], vec![1, 2, 3, 4], vec![1, 2, 9], vec![1, 1, 2]] {
            let err = validate_score_set(&[1, 2, 3], &bad).unwrap_err();
            assert_eq!(err.detail(), "Scores must be provided for all players");
        }
    }
}
