//! Example: progressive pruning of the Hamiltonian path search.
//!
//! Run with:
//! `cargo run --example maze`

use std::time::Instant;

use backprune::{PathCounter, PruningLevel};

fn main() {
    let n = 6;
    println!("How about we count the corner-to-corner tours of a {n}x{n} grid?");
    println!("A tour has to cover every cell exactly once, so the unpruned search");
    println!("walks the whole tree:");
    run_level(n, PruningLevel::None);

    println!();
    println!("The grid is symmetric along its diagonal, so it is enough to start");
    println!("downward and double the result:");
    run_level(n, PruningLevel::Mirror);

    println!();
    println!("Next, branches that touch the final corner too early can never be");
    println!("completed. Cut them on sight:");
    run_level(n, PruningLevel::EarlyGoal);

    println!();
    println!("If we hit the outer wall while both sides stay open, the grid has");
    println!("been divided and one half is lost. Refuse such moves:");
    run_level(n, PruningLevel::WallSplit);

    println!();
    println!("The same applies when the cell ahead is merely visited instead of a");
    println!("wall. Generalizing the guard prunes hardest:");
    run_level(n, PruningLevel::BlockedSplit);

    println!();
    println!("Generally speaking, the more pruning we do, the faster the search.");
}

fn run_level(n: usize, level: PruningLevel) {
    let mut counter = PathCounter::new(n, level).expect("demo size is positive");
    let start = Instant::now();
    let report = counter.run();
    let elapsed = start.elapsed();
    println!(
        "  level {} ({}): {} paths, {} visits, {:.3}s",
        level.index(),
        level,
        report.paths,
        report.calls,
        elapsed.as_secs_f64()
    );
}
