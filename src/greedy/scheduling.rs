//! Selecting as many non-overlapping events as possible.
//!
//! Three strategies over the same scan: sort the events somehow, then keep
//! each one that starts at or after the end of the last kept event. Sorting
//! by end time is the optimal rule; the other two are the tempting wrong
//! answers.

/// A named event over the half-open interval `[start, end)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub name: String,
    pub start: u32,
    pub end: u32,
}

impl Event {
    pub fn new(name: &str, start: u32, end: u32) -> Self {
        Self {
            name: name.to_owned(),
            start,
            end,
        }
    }
}

/// Keep the shortest events first. Suboptimal.
pub fn select_shortest_first(events: &[Event]) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.end - e.start);
    keep_compatible(sorted)
}

/// Keep the earliest-starting events first. Suboptimal.
pub fn select_earliest_start(events: &[Event]) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.start);
    keep_compatible(sorted)
}

/// Keep the earliest-ending events first. Optimal.
pub fn select_earliest_end(events: &[Event]) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.end);
    keep_compatible(sorted)
}

fn keep_compatible(sorted: Vec<Event>) -> Vec<Event> {
    let mut selected: Vec<Event> = Vec::new();
    for event in sorted {
        if selected.last().map_or(true, |last| last.end <= event.start) {
            selected.push(event);
        }
    }
    selected
}
