//! One-number summaries that minimize a deviation sum.
//!
//! Σ|t − x| is minimized by a median of the terms; Σ(t − x)² by their mean.

/// An integer x minimizing `absolute_cost(terms, x)`: the low median.
///
/// # Panics
/// Panics if `terms` is empty.
pub fn minimize_absolute(terms: &[i64]) -> i64 {
    assert!(!terms.is_empty(), "need at least one term");
    let mut sorted = terms.to_vec();
    sorted.sort_unstable();
    sorted[(sorted.len() - 1) / 2]
}

/// The x minimizing `squared_cost(terms, x)`: the mean.
///
/// # Panics
/// Panics if `terms` is empty.
pub fn minimize_squared(terms: &[i64]) -> f64 {
    assert!(!terms.is_empty(), "need at least one term");
    terms.iter().sum::<i64>() as f64 / terms.len() as f64
}

/// Σ|t − x| over the terms.
pub fn absolute_cost(terms: &[i64], x: i64) -> i64 {
    terms.iter().map(|&t| (t - x).abs()).sum()
}

/// Σ(t − x)² over the terms.
pub fn squared_cost(terms: &[i64], x: f64) -> f64 {
    terms.iter().map(|&t| (t as f64 - x).powi(2)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TERMS: [i64; 5] = [1, 2, 9, 2, 6];

    #[test]
    fn low_median_minimizes_absolute_deviation() {
        let x = minimize_absolute(&TERMS);
        assert_eq!(x, 2);
        assert_eq!(absolute_cost(&TERMS, x), 12);
    }

    #[test]
    fn mean_minimizes_squared_deviation() {
        let x = minimize_squared(&TERMS);
        assert_eq!(x, 4.0);
        assert_eq!(squared_cost(&TERMS, x), 46.0);
    }

    #[test]
    fn neighbors_of_the_median_are_no_better() {
        let x = minimize_absolute(&TERMS);
        assert!(absolute_cost(&TERMS, x) <= absolute_cost(&TERMS, x - 1));
        assert!(absolute_cost(&TERMS, x) <= absolute_cost(&TERMS, x + 1));
    }

    #[test]
    fn single_term_is_its_own_summary() {
        assert_eq!(minimize_absolute(&[7]), 7);
        assert_eq!(minimize_squared(&[7]), 7.0);
    }
}
