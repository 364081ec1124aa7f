//! Single-threaded property checks, generic over the comparator.

use crate::order::Comparator;
use crate::set::CoupledSet;

/// Insert, membership, duplicate rejection, removal.
pub fn check_basic_operations<C>(set: &CoupledSet<i32, C>)
where
    C: Comparator<i32>,
{
    assert!(set.insert(5));
    assert!(set.insert(10));
    assert!(set.insert(3));
    assert!(set.insert(7));
    assert!(set.insert(1));

    assert!(!set.insert(5));
    assert!(!set.insert(10));

    assert!(set.contains(&1));
    assert!(set.contains(&3));
    assert!(set.contains(&5));
    assert!(set.contains(&7));
    assert!(set.contains(&10));
    assert!(!set.contains(&2));
    assert!(!set.contains(&99));

    assert!(set.remove(&3));
    assert!(!set.contains(&3));
    assert!(!set.remove(&3));

    assert!(set.contains(&1));
    assert!(set.contains(&5));
    assert!(set.contains(&7));
    assert!(set.contains(&10));
}

/// `add(k)` then `contains(k)` is true; `remove(k)` then `contains(k)` is
/// false — for every key, immediately.
pub fn check_round_trip<C>(set: &CoupledSet<i32, C>)
where
    C: Comparator<i32>,
{
    for key in [0, -5, 100, 42] {
        assert!(set.insert(key));
        assert!(set.contains(&key), "key {} not found after insert", key);
        assert!(set.remove(&key));
        assert!(!set.contains(&key), "key {} found after remove", key);
    }
}

/// Removing an absent key returns false and leaves the set unchanged.
pub fn check_idempotent_removal<C>(set: &CoupledSet<i32, C>)
where
    C: Comparator<i32>,
{
    set.insert(1);
    set.insert(2);
    set.insert(3);
    let before = set.to_vec();

    assert!(!set.remove(&99));
    assert!(!set.remove(&99));
    assert_eq!(set.to_vec(), before);
}

/// Adding the same key twice returns true then false; size grows by one.
pub fn check_duplicate_rejection<C>(set: &CoupledSet<i32, C>)
where
    C: Comparator<i32>,
{
    let before = set.len();
    assert!(set.insert(77));
    assert!(!set.insert(77));
    assert_eq!(set.len(), before + 1);
}

/// After arbitrary churn, the chain is strictly increasing under the
/// comparator and every key occurs at most once.
pub fn check_sorted_and_unique<C>(set: &CoupledSet<i32, C>, order: &C)
where
    C: Comparator<i32>,
{
    let snapshot = set.to_vec();
    for window in snapshot.windows(2) {
        assert_eq!(
            order.compare(&window[0], &window[1]),
            std::cmp::Ordering::Less,
            "chain has an inversion or duplicate: {:?}",
            window
        );
    }
}
