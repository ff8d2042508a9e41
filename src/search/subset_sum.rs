//! Subset-sum reachability.
//!
//! The exhaustive route scans all 2ⁿ subset sums. Meet-in-the-middle splits
//! the items in half, enumerates 2^(n/2) sums per half, sorts one side and
//! binary-searches it for each sum of the other, trading memory for an
//! exponent.

/// Sums of every subset of `items`, one entry per bitmask.
///
/// # Panics
/// Panics if `items` has more elements than `usize` has bits.
pub fn subset_sums(items: &[i64]) -> Vec<i64> {
    assert!(
        items.len() < usize::BITS as usize,
        "bitmask enumeration needs fewer than {} items",
        usize::BITS
    );
    (0..1usize << items.len())
        .map(|mask| {
            items
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, &v)| v)
                .sum()
        })
        .collect()
}

/// Whether some subset of `items` sums to `target`, by exhaustive scan.
pub fn has_subset_sum_exhaustive(items: &[i64], target: i64) -> bool {
    subset_sums(items).into_iter().any(|sum| sum == target)
}

/// Whether some subset of `items` sums to `target`, meeting in the middle.
pub fn has_subset_sum_meet_in_middle(items: &[i64], target: i64) -> bool {
    let (first, second) = items.split_at(items.len() / 2);
    let first_sums = subset_sums(first);
    let mut second_sums = subset_sums(second);
    second_sums.sort_unstable();
    first_sums
        .into_iter()
        .any(|sum| second_sums.binary_search(&(target - sum)).is_ok())
}
