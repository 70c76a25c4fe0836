//! Property tests for dealer rotation (pure domain, no DB).
//!
//! Properties tested:
//! - The next dealer is always a seated player
//! - A full cycle of hands visits every seat exactly once

use proptest::prelude::*;

use crate::domain::rotation::next_dealer;
use crate::domain::{MAX_PLAYERS, MIN_PLAYERS};

fn seats() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::btree_set(1i64..10_000, MIN_PLAYERS..=MAX_PLAYERS)
        .prop_map(|set| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_next_dealer_is_seated(
        ids in seats(),
        initial_idx in 0usize..MAX_PLAYERS,
        last in prop::option::of(1i64..10_000),
    ) {
        let initial = ids[initial_idx % ids.len()];
        let dealer = next_dealer(&ids, Some(initial), last);
        prop_assert!(ids.contains(&dealer));
    }

    #[test]
    fn prop_full_cycle_visits_every_seat(
        ids in seats(),
        initial_idx in 0usize..MAX_PLAYERS,
    ) {
        let initial = ids[initial_idx % ids.len()];
        let mut last = None;
        let mut seen = Vec::new();
        for _ in 0..ids.len() {
            let dealer = next_dealer(&ids, Some(initial), last);
            seen.push(dealer);
            last = Some(dealer);
        }

        prop_assert_eq!(seen[0], initial);
        seen.sort_unstable();
        prop_assert_eq!(seen, ids.clone());

        // and the cycle closes
        prop_assert_eq!(next_dealer(&ids, Some(initial), last), initial);
    }
}
