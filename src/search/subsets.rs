//! Enumerate all subsets of 0..n.
//!
//! Two routes to the same 2ⁿ subsets: an include/exclude recursion, and a
//! scan over n-bit masks where bit i selects element i.

/// Invoke `visit` once per subset of `0..n`, via include/exclude recursion.
pub fn for_each_subset<F>(n: usize, mut visit: F)
where
    F: FnMut(&[usize]),
{
    let mut subset = Vec::with_capacity(n);
    descend(n, 0, &mut subset, &mut visit);
}

fn descend<F>(n: usize, k: usize, subset: &mut Vec<usize>, visit: &mut F)
where
    F: FnMut(&[usize]),
{
    if k == n {
        visit(subset);
        return;
    }
    descend(n, k + 1, subset, visit);
    subset.push(k);
    descend(n, k + 1, subset, visit);
    subset.pop();
}

/// All subsets of `0..n` in the recursion's emission order.
pub fn generate_subsets(n: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    for_each_subset(n, |s| out.push(s.to_vec()));
    out
}

/// All subsets of `0..n` by enumerating bitmasks `0..2^n`.
///
/// # Panics
/// Panics if `n` exceeds the width of `usize`.
pub fn generate_subsets_bitwise(n: usize) -> Vec<Vec<usize>> {
    assert!(n < usize::BITS as usize, "bitmask enumeration needs n < {}", usize::BITS);
    (0..1usize << n)
        .map(|mask| (0..n).filter(|i| mask & (1 << i) != 0).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{generate_subsets, generate_subsets_bitwise};
    use std::collections::BTreeSet;

    #[test]
    fn counts_are_powers_of_two() {
        for n in 0..=8 {
            assert_eq!(generate_subsets(n).len(), 1 << n);
            assert_eq!(generate_subsets_bitwise(n).len(), 1 << n);
        }
    }

    #[test]
    fn recursive_and_bitwise_agree_as_sets() {
        for n in 0..=6 {
            let recursive: BTreeSet<Vec<usize>> = generate_subsets(n).into_iter().collect();
            let bitwise: BTreeSet<Vec<usize>> =
                generate_subsets_bitwise(n).into_iter().collect();
            assert_eq!(recursive, bitwise, "n = {n}");
        }
    }

    #[test]
    fn extremes_are_present() {
        let subsets = generate_subsets(4);
        assert!(subsets.contains(&Vec::new()));
        assert!(subsets.contains(&vec![0, 1, 2, 3]));
    }
}
