use std::{cmp::Reverse, collections::BinaryHeap};

use crate::AvlMap;

/// Select the `k` entries of `map` with the largest values, ordered from
/// largest to smallest.
///
/// Entries with equal values are ordered by ascending key. Fewer than `k`
/// entries are returned if `map` holds fewer than `k` entries.
///
/// ```
/// use avlmap::{words::top_k, AvlMap};
///
/// let counts = [("a", 1), ("b", 5), ("c", 3), ("d", 5)]
///     .into_iter()
///     .collect::<AvlMap<_, _>>();
///
/// assert_eq!(top_k(&counts, 3), [("b", 5), ("d", 5), ("c", 3)]);
/// ```
pub fn top_k<K, V>(map: &AvlMap<K, V>, k: usize) -> Vec<(K, V)>
where
    K: Ord + Clone,
    V: Ord + Clone,
{
    // A max-heap ordered by value, tie-broken by the smallest key.
    let mut heap = map
        .traverse_in_order()
        .into_iter()
        .map(|(key, value)| (value, Reverse(key)))
        .collect::<BinaryHeap<_>>();

    std::iter::from_fn(|| heap.pop())
        .take(k)
        .map(|(value, Reverse(key))| (key, value))
        .collect()
}
