use backprune::search::permutations::generate_permutations;
use backprune::search::queens::count_queen_placements;
use backprune::search::subset_sum::{
    has_subset_sum_exhaustive, has_subset_sum_meet_in_middle, subset_sums,
};
use backprune::search::subsets::{generate_subsets, generate_subsets_bitwise};
use proptest::prelude::*;

/// Queen placements counted a different way: every placement is a
/// permutation (one queen per row), filtered by the diagonal constraints.
fn queens_via_permutations(n: usize) -> u64 {
    generate_permutations(n)
        .into_iter()
        .filter(|columns| {
            let mut falling = std::collections::HashSet::new();
            let mut rising = std::collections::HashSet::new();
            columns.iter().enumerate().all(|(row, &col)| {
                falling.insert(col + row) && rising.insert(col as isize - row as isize)
            })
        })
        .count() as u64
}

#[test]
fn queen_counts_match_the_permutation_filter() {
    for n in 0..=6 {
        assert_eq!(count_queen_placements(n), queens_via_permutations(n), "n = {n}");
    }
}

proptest! {
    #[test]
    fn meet_in_the_middle_matches_exhaustive(
        items in prop::collection::vec(-20i64..=20, 0..12),
        target in -60i64..=60
    ) {
        prop_assert_eq!(
            has_subset_sum_meet_in_middle(&items, target),
            has_subset_sum_exhaustive(&items, target)
        );
    }

    #[test]
    fn reachable_targets_are_found(items in prop::collection::vec(-20i64..=20, 1..12)) {
        // Any actual subset sum must be reported reachable.
        let sums = subset_sums(&items);
        let probe = sums[sums.len() / 2];
        prop_assert!(has_subset_sum_meet_in_middle(&items, probe));
    }

    #[test]
    fn subset_enumerations_agree(n in 0usize..=8) {
        let mut recursive = generate_subsets(n);
        let mut bitwise = generate_subsets_bitwise(n);
        recursive.sort();
        bitwise.sort();
        prop_assert_eq!(recursive, bitwise);
        prop_assert_eq!(generate_subsets(n).len(), 1 << n);
    }

    #[test]
    fn permutations_are_distinct_and_complete(n in 0usize..=5) {
        let perms = generate_permutations(n);
        let expected: usize = (1..=n).product();
        prop_assert_eq!(perms.len(), expected);
        let unique: std::collections::HashSet<_> = perms.iter().cloned().collect();
        prop_assert_eq!(unique.len(), perms.len());
    }
}
