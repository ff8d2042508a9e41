//! Which subset sums are reachable from a set of weights.
//!
//! Two renditions of the same recurrence. The table version keeps one row
//! per considered prefix of the weights; the compact version updates a
//! single row in place by scanning amounts downward, so each weight is
//! counted at most once.

/// Reachable sums via the two-dimensional prefix table.
pub fn reachable_sums_table(weights: &[usize]) -> Vec<usize> {
    let max_sum: usize = weights.iter().sum();
    let mut possible = vec![vec![false; max_sum + 1]; weights.len() + 1];
    possible[0][0] = true;

    for k in 1..=weights.len() {
        for sum in 0..=max_sum {
            let without = possible[k - 1][sum];
            let with = sum
                .checked_sub(weights[k - 1])
                .map_or(false, |rest| possible[k - 1][rest]);
            possible[k][sum] = without || with;
        }
    }

    collect_reachable(possible.last().expect("table has a row"))
}

/// Reachable sums via a single row updated in place.
pub fn reachable_sums(weights: &[usize]) -> Vec<usize> {
    let max_sum: usize = weights.iter().sum();
    let mut possible = vec![false; max_sum + 1];
    possible[0] = true;

    for &weight in weights {
        // Downward so a weight never feeds its own updates.
        for sum in (weight..=max_sum).rev() {
            if possible[sum - weight] {
                possible[sum] = true;
            }
        }
    }

    collect_reachable(&possible)
}

fn collect_reachable(possible: &[bool]) -> Vec<usize> {
    possible
        .iter()
        .enumerate()
        .filter(|(_, &ok)| ok)
        .map(|(sum, _)| sum)
        .collect()
}
