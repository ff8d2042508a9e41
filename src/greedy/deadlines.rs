//! Ordering tasks to maximize total deadline slack.
//!
//! Finishing a task at time x with deadline d scores d − x. The total over
//! all tasks only depends on the finish times, and shortest-first minimizes
//! their sum, so sorting by duration is optimal; the deadlines never enter
//! the decision.

/// A task with a duration and a deadline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub duration: u32,
    pub deadline: i64,
}

impl Task {
    pub fn new(name: &str, duration: u32, deadline: i64) -> Self {
        Self {
            name: name.to_owned(),
            duration,
            deadline,
        }
    }
}

/// The tasks in score-maximizing execution order.
pub fn schedule(tasks: &[Task]) -> Vec<Task> {
    let mut ordered = tasks.to_vec();
    ordered.sort_by_key(|t| (t.duration, t.deadline));
    ordered
}

/// Total score of executing `tasks` in the given order.
pub fn score(tasks: &[Task]) -> i64 {
    let mut now = 0i64;
    let mut total = 0i64;
    for task in tasks {
        now += i64::from(task.duration);
        total += task.deadline - now;
    }
    total
}
