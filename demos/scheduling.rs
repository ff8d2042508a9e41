//! Example: event selection and deadline ordering.
//!
//! Run with:
//! `cargo run --example scheduling`

use backprune::greedy::deadlines::{schedule, score, Task};
use backprune::greedy::scheduling::{
    select_earliest_end, select_earliest_start, select_shortest_first, Event,
};

fn main() {
    let events = vec![
        Event::new("A", 1, 3),
        Event::new("B", 2, 5),
        Event::new("C", 3, 9),
        Event::new("D", 6, 8),
    ];
    println!("Assume we have these events:");
    print_events(&events);

    println!("Select as many non-overlapping events as possible.");
    println!("Shortest first picks:");
    print_events(&select_shortest_first(&events));
    println!("Earliest start picks:");
    print_events(&select_earliest_start(&events));
    println!("Earliest end, the optimal rule, picks:");
    print_events(&select_earliest_end(&events));

    println!();
    let tasks = vec![
        Task::new("A", 4, 2),
        Task::new("B", 3, 5),
        Task::new("C", 2, 7),
        Task::new("D", 4, 5),
    ];
    println!("Now order tasks with durations and deadlines. Finishing a task at");
    println!("time x with deadline d yields d - x points. Sorting by duration is");
    println!("all it takes:");
    let ordered = schedule(&tasks);
    for task in &ordered {
        println!(
            "  {} (duration {}, deadline {})",
            task.name, task.duration, task.deadline
        );
    }
    println!("This order yields {} points.", score(&ordered));
}

fn print_events(events: &[Event]) {
    for event in events {
        println!("  {} [{}, {})", event.name, event.start, event.end);
    }
}
