//! Grouping of flat hand/score join rows into per-hand groups.

/// Fold rows into groups keyed by hand id, keeping first-seen order.
///
/// Each item is `(hand_id, head, score)`. The head of the first row of a hand
/// is kept; rows whose score is `None` (a hand without scores) still open a
/// group.
pub fn group_by_hand<H, S>(rows: impl IntoIterator<Item = (i64, H, Option<S>)>) -> Vec<(H, Vec<S>)> {
    let mut ids: Vec<i64> = Vec::new();
    let mut groups: Vec<(H, Vec<S>)> = Vec::new();

    for (hand_id, head, score) in rows {
        // rows arrive grouped, so only the last group can match
        let idx = match ids.last() {
            Some(&last) if last == hand_id => groups.len() - 1,
            _ => match ids.iter().position(|&id| id == hand_id) {
                Some(idx) => idx,
                None => {
                    ids.push(hand_id);
                    groups.push((head, Vec::new()));
                    groups.len() - 1
                }
            },
        };
        if let Some(score) = score {
            groups[idx].1.push(score);
        }
    }

    groups
}

/// Keep the first `limit` groups of a newest-first list and return them
/// oldest first.
pub fn newest_ascending<T>(mut newest_first: Vec<T>, limit: usize) -> Vec<T> {
    newest_first.truncate(limit);
    newest_first.reverse();
    newest_first
}
