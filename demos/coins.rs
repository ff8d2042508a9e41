//! Example: greedy versus exact change making.
//!
//! Run with:
//! `cargo run --example coins`

use backprune::dp::coin_change::CoinChange;
use backprune::greedy::coin_change::greedy_coin_count;

fn main() {
    let euros = vec![1u64, 2, 5, 10, 20, 50, 100, 200];
    let target = 520;
    println!("Assume we have all euro coins available to us, in cents: {euros:?}");
    println!("How many coins do we need to get {target} cents?");
    match greedy_coin_count(&euros, target) {
        Some(count) => println!("The greedy strategy says {count}."),
        None => println!("The greedy strategy got stuck."),
    }

    let coins = vec![1u64, 3, 4];
    let target = 6;
    println!();
    println!("But largest-first does not survive a general system. Take {coins:?}");
    println!("with target {target}: the optimum is 2 coins, 3 + 3, yet the greedy says...");
    match greedy_coin_count(&coins, target) {
        Some(count) => println!("{count} coins."),
        None => println!("stuck."),
    }

    println!();
    println!("Dynamic programming handles any system. The same instance solved exactly:");
    let solver = CoinChange::new(coins);
    let result = solver.solve(target).expect("target is reachable");
    let sum = result
        .coins
        .iter()
        .map(|coin| coin.to_string())
        .collect::<Vec<_>>()
        .join("+");
    println!(
        "  {} coins ({sum}), with {} ordered ways to reach {target}",
        result.fewest, result.orderings
    );
}
