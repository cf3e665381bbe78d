//! Property-based tests for the sorted list types.
//!
//! These tests verify that the ordering and lookup contracts hold for
//! arbitrary inputs, not just the hand-picked cases in the unit tests.

use proptest::prelude::*;
use sorted_keylist::{KeyedSortedList, ListError, SortedList};

// =============================================================================
// Sort invariant
// Description: any sequence of adds keeps iteration in non-decreasing order
// =============================================================================

proptest! {
    #[test]
    fn prop_adds_keep_sorted(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut list = SortedList::new();

        for v in values {
            list.add(v);
            prop_assert!(list.iter().zip(list.iter().skip(1)).all(|(a, b)| a <= b));
        }
    }
}

proptest! {
    #[test]
    fn prop_adds_keep_key_order(values in prop::collection::vec(any::<(u8, u8)>(), 0..100)) {
        let mut list = KeyedSortedList::new(|v: &(u8, u8)| v.0);

        for v in values {
            list.add(v);
        }

        let keys = list.iter().map(|v| v.0).collect::<Vec<_>>();
        prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }
}

// =============================================================================
// Construction round-trip
// Description: building from an iterable equals a stable sort by key
// =============================================================================

proptest! {
    #[test]
    fn prop_construction_matches_stable_sort(
        values in prop::collection::vec(any::<(u8, u8)>(), 0..100)
    ) {
        let list = KeyedSortedList::from_values(values.clone(), |v: &(u8, u8)| v.0);

        // sort_by_key is stable, so equal keys keep input order, which is
        // exactly the contract for construction
        let mut expected = values;
        expected.sort_by_key(|v| v.0);

        let actual = list.iter().copied().collect::<Vec<_>>();
        prop_assert_eq!(actual, expected);
    }
}

// =============================================================================
// Add/remove inverse
// Description: adding a value then removing it restores the prior sequence
// =============================================================================

proptest! {
    #[test]
    fn prop_add_then_remove_restores(
        values in prop::collection::vec(any::<(u8, u8)>(), 0..50),
        extra: (u8, u8)
    ) {
        let mut list = KeyedSortedList::from_values(values, |v: &(u8, u8)| v.0);
        let before = list.iter().copied().collect::<Vec<_>>();

        list.add(extra);
        prop_assert_eq!(list.remove(&extra), Ok(extra));

        let after = list.iter().copied().collect::<Vec<_>>();
        prop_assert_eq!(after, before);
    }
}

// =============================================================================
// Count consistency
// Description: count equals the number of equal elements seen by iteration
// =============================================================================

proptest! {
    #[test]
    fn prop_count_matches_filter(
        values in prop::collection::vec(0u8..8, 0..100),
        probe in 0u8..8
    ) {
        let list = SortedList::from_values(values);

        let expected = list.iter().filter(|v| **v == probe).count();
        prop_assert_eq!(list.count(&probe), expected);
    }
}

proptest! {
    #[test]
    fn prop_count_in_key_run_matches_filter(
        values in prop::collection::vec(0u8..16, 0..100),
        probe in 0u8..16
    ) {
        // many-to-one key: values sharing a run must still be told apart
        let list = KeyedSortedList::from_values(values, |v: &u8| v / 3);

        let expected = list.iter().filter(|v| **v == probe).count();
        prop_assert_eq!(list.count(&probe), expected);
    }
}

// =============================================================================
// Find vs index agreement
// Description: the sentinel and the strict lookup agree on every probe
// =============================================================================

proptest! {
    #[test]
    fn prop_find_and_index_agree(
        values in prop::collection::vec(0u8..8, 0..50),
        probe in 0u8..8
    ) {
        let list = SortedList::from_values(values);

        match list.find(&probe) {
            Some(index) => {
                prop_assert_eq!(list.index_of(&probe), Ok(index));
                prop_assert_eq!(list[index], probe);
                // first occurrence: everything before it is strictly smaller
                prop_assert!(index == 0 || list[index - 1] < probe);
            }
            None => {
                prop_assert_eq!(list.index_of(&probe), Err(ListError::NotFound));
                prop_assert!(!list.contains(&probe));
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_rfind_is_last_occurrence(
        values in prop::collection::vec(0u8..8, 0..50),
        probe in 0u8..8
    ) {
        let list = SortedList::from_values(values);

        let expected = list.iter().rposition(|v| *v == probe);
        prop_assert_eq!(list.rfind(&probe), expected);
    }
}
