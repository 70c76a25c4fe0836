//! Dealer rotation.

/// Pick the dealer for the next hand.
///
/// `player_ids` must be in seat (id) order. The deal passes to the seat after
/// the last hand's dealer, wrapping. With no hands yet, or when the last
/// dealer is no longer seated, the initial dealer deals.
///
/// A game with no initial dealer falls back to its first seat, and a game with
/// no seats at all yields `1`; callers treat an id that matches no seat as
/// an unknown dealer.
pub fn next_dealer(player_ids: &[i64], initial_dealer: Option<i64>, last_dealer: Option<i64>) -> i64 {
    let Some(initial) = initial_dealer.filter(|_| !player_ids.is_empty()) else {
        return player_ids.first().copied().unwrap_or(1);
    };

    let Some(last) = last_dealer else {
        return initial;
    };

    match player_ids.iter().position(|&id| id == last) {
        Some(pos) => player_ids[(pos + 1) % player_ids.len()],
        None => initial,
    }
}

#[cfg(test)]
mod tests {
    use super::next_dealer;

    const SEATS: [i64; 3] = [10, 11, 12];

    #[test]
    fn first_hand_uses_initial_dealer() {
        assert_eq!(next_dealer(&SEATS, Some(11), None), 11);
    }

    #[test]
    fn rotates_to_following_seat() {
        assert_eq!(next_dealer(&SEATS, Some(11), Some(11)), 12);
        assert_eq!(next_dealer(&SEATS, Some(11), Some(10)), 11);
    }

    #[test]
    fn wraps_after_last_seat() {
        assert_eq!(next_dealer(&SEATS, Some(11), Some(12)), 10);
    }

    #[test]
    fn unknown_last_dealer_restarts_at_initial() {
        assert_eq!(next_dealer(&SEATS, Some(12), Some(99)), 12);
    }

    #[test]
    fn missing_initial_dealer_uses_first_seat() {
        assert_eq!(next_dealer(&SEATS, None, Some(11)), 10);
    }

    #[test]
    fn no_seats_yields_one() {
        assert_eq!(next_dealer(&[], None, None), 1);
        assert_eq!(next_dealer(&[], Some(5), Some(5)), 1);
    }
}
