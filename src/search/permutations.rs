//! Enumerate all permutations of 0..n by backtracking.
//!
//! The recursion extends a prefix with every value not already chosen,
//! recurses, then removes it again. Callers that only need to look at each
//! permutation use [`for_each_permutation`]; [`generate_permutations`]
//! collects them in the order the recursion emits them (lexicographic).

/// Invoke `visit` once per permutation of `0..n`.
pub fn for_each_permutation<F>(n: usize, mut visit: F)
where
    F: FnMut(&[usize]),
{
    let mut prefix = Vec::with_capacity(n);
    let mut chosen = vec![false; n];
    extend(n, &mut prefix, &mut chosen, &mut visit);
}

fn extend<F>(n: usize, prefix: &mut Vec<usize>, chosen: &mut [bool], visit: &mut F)
where
    F: FnMut(&[usize]),
{
    if prefix.len() == n {
        visit(prefix);
        return;
    }
    for value in 0..n {
        if chosen[value] {
            continue;
        }
        chosen[value] = true;
        prefix.push(value);
        extend(n, prefix, chosen, visit);
        prefix.pop();
        chosen[value] = false;
    }
}

/// All permutations of `0..n`, in lexicographic order.
pub fn generate_permutations(n: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    for_each_permutation(n, |p| out.push(p.to_vec()));
    out
}
