//! Fewest-coins change making with full reconstruction.
//!
//! A bottom-up table over amounts `0..=target` records, per amount, the
//! fewest coins needed, the number of ordered ways to build it, and the
//! first coin of one optimal solution. Unlike the greedy heuristic in
//! [`crate::greedy::coin_change`], this is exact for every coin system.

/// A coin system, i.e. the set of denominations available.
pub struct CoinChange {
    coins: Vec<u64>,
}

/// One solved target amount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeResult {
    /// Fewest coins that reach the target.
    pub fewest: u64,
    /// Number of ordered coin sequences that reach the target.
    pub orderings: u64,
    /// The coins of one optimal solution, in reconstruction order.
    pub coins: Vec<u64>,
}

impl CoinChange {
    /// # Panics
    /// Panics if any denomination is zero.
    pub fn new(coins: Vec<u64>) -> Self {
        assert!(
            coins.iter().all(|&c| c > 0),
            "denominations must be positive"
        );
        Self { coins }
    }

    /// Solve for `target`, or `None` when no combination reaches it.
    pub fn solve(&self, target: u64) -> Option<ChangeResult> {
        let size = usize::try_from(target).expect("target fits in memory");
        let mut fewest: Vec<Option<u64>> = vec![None; size + 1];
        let mut orderings = vec![0u64; size + 1];
        let mut first_coin = vec![0u64; size + 1];
        fewest[0] = Some(0);
        orderings[0] = 1;

        for amount in 1..=size {
            for &coin in &self.coins {
                let Some(rest) = amount.checked_sub(coin as usize) else {
                    continue;
                };
                orderings[amount] = orderings[amount].saturating_add(orderings[rest]);
                if let Some(below) = fewest[rest] {
                    if fewest[amount].map_or(true, |current| below + 1 < current) {
                        fewest[amount] = Some(below + 1);
                        first_coin[amount] = coin;
                    }
                }
            }
        }

        let best = fewest[size]?;
        let mut coins = Vec::with_capacity(best as usize);
        let mut remaining = size;
        while remaining > 0 {
            let coin = first_coin[remaining];
            coins.push(coin);
            remaining -= coin as usize;
        }
        Some(ChangeResult {
            fewest: best,
            orderings: orderings[size],
            coins,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::CoinChange;

    #[test]
    fn general_system_beats_greedy() {
        let solver = CoinChange::new(vec![1, 3, 4]);
        let result = solver.solve(6).unwrap();
        assert_eq!(result.fewest, 2);
        assert_eq!(result.coins, vec![3, 3]);
        assert_eq!(result.orderings, 9);
    }

    #[test]
    fn euro_coins() {
        let solver = CoinChange::new(vec![1, 2, 5, 10, 20, 50, 100, 200]);
        assert_eq!(solver.solve(520).unwrap().fewest, 4);
    }

    #[test]
    fn reconstruction_sums_to_target() {
        let solver = CoinChange::new(vec![1, 3, 4]);
        for target in 0..=30 {
            let result = solver.solve(target).unwrap();
            assert_eq!(result.coins.iter().sum::<u64>(), target);
            assert_eq!(result.coins.len() as u64, result.fewest);
        }
    }

    #[test]
    fn unreachable_target_is_none() {
        let solver = CoinChange::new(vec![2, 4]);
        assert!(solver.solve(7).is_none());
        assert!(solver.solve(8).is_some());
    }

    #[test]
    fn zero_target_needs_no_coins() {
        let solver = CoinChange::new(vec![5]);
        let result = solver.solve(0).unwrap();
        assert_eq!(result.fewest, 0);
        assert!(result.coins.is_empty());
        assert_eq!(result.orderings, 1);
    }

    #[test]
    #[should_panic]
    fn zero_denomination_panics() {
        let _ = CoinChange::new(vec![1, 0]);
    }
}
