// SPDX-License-Identifier: Apache-2.0

//! Exchange sort used to order users by public repository count.
//!
//! Each pass walks the unsorted prefix and swaps adjacent pairs that are out
//! of order, so the smallest remaining count sinks to the end. A pass that
//! performs no swaps ends the sort early, which makes already-sorted input
//! cost a single linear pass.

use serde::Serialize;

use crate::user::UserRecord;

/// Work performed by one sort invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortStats {
    /// Passes over the unsorted prefix.
    pub passes: usize,
    /// Adjacent comparisons made.
    pub comparisons: usize,
    /// Adjacent swaps made.
    pub swaps: usize,
}

/// Sorts `items` in place with a bounded exchange sort.
///
/// `out_of_order(a, b)` must return true when `a` has to move after its right
/// neighbour `b`. Pairs for which it returns false are never swapped, so equal
/// elements keep the order they were encountered in.
pub fn exchange_sort_by<T, F>(items: &mut [T], mut out_of_order: F) -> SortStats
where
    F: FnMut(&T, &T) -> bool,
{
    let n = items.len();
    let mut stats = SortStats::default();

    for pass in 0..n.saturating_sub(1) {
        stats.passes += 1;
        let mut swapped = false;

        // After `pass` passes the last `pass` slots already hold their final elements.
        for j in 0..n - pass - 1 {
            stats.comparisons += 1;
            if out_of_order(&items[j], &items[j + 1]) {
                items.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    stats
}

/// Sorts records by public repository count, highest first.
pub fn sort_by_public_repos(records: &mut [UserRecord]) -> SortStats {
    exchange_sort_by(records, |a, b| a.public_repos < b.public_repos)
}

/// Consuming variant of [`sort_by_public_repos`] that returns the new ordering.
#[must_use]
pub fn sorted_by_public_repos(mut records: Vec<UserRecord>) -> (Vec<UserRecord>, SortStats) {
    let stats = sort_by_public_repos(&mut records);
    (records, stats)
}

/// Returns true if repository counts never increase from one record to the next.
#[must_use]
pub fn is_sorted_desc(records: &[UserRecord]) -> bool {
    records
        .windows(2)
        .all(|pair| pair[0].public_repos >= pair[1].public_repos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(counts: &[u32]) -> Vec<UserRecord> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &repos)| UserRecord::new(format!("user{i}"), i as u64, repos))
            .collect()
    }

    fn counts(records: &[UserRecord]) -> Vec<u32> {
        records.iter().map(|r| r.public_repos).collect()
    }

    #[test]
    fn empty_list_is_noop() {
        let mut users: Vec<UserRecord> = Vec::new();
        let stats = sort_by_public_repos(&mut users);
        assert!(users.is_empty());
        assert_eq!(stats, SortStats::default());
    }

    #[test]
    fn single_element_is_noop() {
        let mut users = records(&[7]);
        let stats = sort_by_public_repos(&mut users);
        assert_eq!(counts(&users), vec![7]);
        assert_eq!(stats.passes, 0);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn sorts_descending() {
        let mut users = records(&[3, 10, 0, 8, 8, 1]);
        sort_by_public_repos(&mut users);
        assert_eq!(counts(&users), vec![10, 8, 8, 3, 1, 0]);
    }

    #[test]
    fn already_sorted_takes_one_pass_without_swaps() {
        let mut users = records(&[50, 20, 20, 4, 0]);
        let stats = sort_by_public_repos(&mut users);
        assert_eq!(stats.passes, 1);
        assert_eq!(stats.swaps, 0);
        assert_eq!(stats.comparisons, 4);
    }

    #[test]
    fn reversed_input_is_worst_case() {
        let mut users = records(&[1, 2, 3, 4, 5]);
        let stats = sort_by_public_repos(&mut users);
        assert_eq!(counts(&users), vec![5, 4, 3, 2, 1]);
        assert_eq!(stats.swaps, 10);
        assert_eq!(stats.comparisons, 10);
        assert_eq!(stats.passes, 4);
    }

    #[test]
    fn ties_keep_encounter_order() {
        let mut users = vec![
            UserRecord::new("a", 1, 2),
            UserRecord::new("b", 2, 5),
            UserRecord::new("c", 3, 2),
            UserRecord::new("d", 4, 5),
        ];
        sort_by_public_repos(&mut users);
        let logins: Vec<&str> = users.iter().map(|u| u.login.as_str()).collect();
        assert_eq!(logins, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn randomized_inputs_come_out_sorted() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..200 {
            let len = rng.usize(0..40);
            let input: Vec<u32> = (0..len).map(|_| rng.u32(0..25)).collect();
            let original = records(&input);
            let mut users = original.clone();

            let stats = sort_by_public_repos(&mut users);

            assert!(is_sorted_desc(&users), "not sorted: {:?}", counts(&users));
            assert!(stats.comparisons <= len * len.saturating_sub(1) / 2);

            // Every input login comes out exactly once.
            let mut ids: Vec<u64> = users.iter().map(|u| u.id).collect();
            ids.sort_unstable();
            assert_eq!(ids, (0..len as u64).collect::<Vec<_>>());

            // Equal counts keep their input order, which is what a stable sort yields.
            let mut expected = original;
            expected.sort_by(|a, b| b.public_repos.cmp(&a.public_repos));
            assert_eq!(users, expected);

            let again = sort_by_public_repos(&mut users);
            assert_eq!(again.swaps, 0);
        }
    }

    #[test]
    fn sorted_variant_returns_new_ordering() {
        let (users, stats) = sorted_by_public_repos(records(&[1, 9]));
        assert_eq!(counts(&users), vec![9, 1]);
        assert_eq!(stats.swaps, 1);
    }

    #[test]
    fn generic_sort_accepts_any_ordering() {
        let mut values = [4, 1, 3];
        let stats = exchange_sort_by(&mut values, |a, b| a > b);
        assert_eq!(values, [1, 3, 4]);
        assert_eq!(stats.swaps, 2);
    }

    #[test]
    fn is_sorted_desc_detects_increase() {
        assert!(is_sorted_desc(&records(&[])));
        assert!(is_sorted_desc(&records(&[3, 3, 1])));
        assert!(!is_sorted_desc(&records(&[3, 4])));
    }
}
