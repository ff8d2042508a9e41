//! Exhaustive counter for corner-to-corner Hamiltonian paths.
//!
//! The counter walks an n×n grid depth-first from the top-left corner,
//! marking cells on the way down and unmarking them on the way back up, and
//! counts the walks that cover every cell and end in the bottom-right
//! corner. A [`PruningLevel`] layers guards onto the same skeleton; every
//! level reports the same count while visiting fewer states.
//!
//! ```
//! use backprune::{PathCounter, PruningLevel};
//!
//! let mut counter = PathCounter::new(5, PruningLevel::BlockedSplit).unwrap();
//! assert_eq!(counter.run().paths, 104);
//! ```
//!
//! Invariant: a cell is marked exactly while some ancestor frame of the
//! recursion sits on it. Every guard that can abandon a branch runs before
//! the candidate cell is marked, so no exit path can leak a mark.

use std::fmt;

use crate::grid::{Cell, Direction, Grid};
use crate::pruning::PruningLevel;

/// Rejected counter construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CounterError {
    /// Grid size was zero.
    EmptyGrid,
    /// Numeric pruning level outside 0..=4.
    UnknownLevel(u8),
}

impl fmt::Display for CounterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounterError::EmptyGrid => write!(f, "grid size must be at least 1"),
            CounterError::UnknownLevel(index) => {
                write!(f, "pruning level {index} is not in 0..=4")
            }
        }
    }
}

impl std::error::Error for CounterError {}

/// Totals gathered during one full search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// Hamiltonian paths found, after mirror doubling when that is active.
    pub paths: u64,
    /// Recursive visits performed, including visits a guard cut short.
    pub calls: u64,
}

/// Counts simple paths from `(0, 0)` to `(n-1, n-1)` that cover the grid.
///
/// The counter owns its grid; [`run`](Self::run) resets it, so one counter
/// can be reused and two runs always report the same totals.
#[derive(Debug)]
pub struct PathCounter {
    grid: Grid,
    level: PruningLevel,
    start: Cell,
    goal: Cell,
}

impl PathCounter {
    /// Create a counter for an n×n grid.
    ///
    /// Returns [`CounterError::EmptyGrid`] when `n == 0`.
    pub fn new(n: usize, level: PruningLevel) -> Result<Self, CounterError> {
        if n == 0 {
            return Err(CounterError::EmptyGrid);
        }
        Ok(Self {
            grid: Grid::new(n),
            level,
            start: (0, 0),
            goal: (n - 1, n - 1),
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// The active pruning level.
    pub fn level(&self) -> PruningLevel {
        self.level
    }

    /// The owned grid. All cells are unmarked between runs.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Run the exhaustive search and return its totals.
    pub fn run(&mut self) -> SearchReport {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "count_paths",
            n = self.grid.size(),
            level = %self.level
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.grid.clear();
        let mut report = SearchReport::default();
        if self.start == self.goal {
            // 1×1 grid: the path is the start cell itself, and the mirror
            // argument does not apply because there is no first move.
            report.paths = 1;
            return report;
        }
        self.visit(self.start, 1, &mut report);
        if self.level.halves_by_mirror() {
            report.paths *= 2;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(paths = report.paths, calls = report.calls, "search finished");

        report
    }

    fn visit(&mut self, cell: Cell, visited: usize, report: &mut SearchReport) {
        report.calls += 1;
        if self.level.rejects_early_goal() && cell == self.goal && visited < self.grid.cell_count()
        {
            return;
        }
        self.grid.mark(cell);
        if visited == self.grid.cell_count() {
            if cell == self.goal {
                report.paths += 1;
            }
        } else if cell == self.start && self.level.halves_by_mirror() {
            // Down only; the right-first half is recovered by doubling.
            if let Some(next) = self.grid.step(cell, Direction::Down) {
                self.visit(next, visited + 1, report);
            }
        } else {
            for dir in Direction::ALL {
                let Some(next) = self.grid.step(cell, dir) else {
                    continue;
                };
                if self.grid.is_marked(next) || !self.admits(next, dir) {
                    continue;
                }
                self.visit(next, visited + 1, report);
            }
        }
        self.grid.unmark(cell);
    }

    /// Split guards for the two strongest levels.
    ///
    /// Stepping onto `cell` along `dir` is rejected when both lateral
    /// neighbors are in bounds and unvisited while the cell ahead is
    /// blocked: the move would cut the unvisited region in two, and no
    /// single path covers both halves.
    fn admits(&self, cell: Cell, dir: Direction) -> bool {
        if !self.level.rejects_wall_split() {
            return true;
        }
        for lat in dir.lateral() {
            match self.grid.step(cell, lat) {
                Some(side) if !self.grid.is_marked(side) => {}
                _ => return true,
            }
        }
        let ahead_blocked = match self.grid.step(cell, dir) {
            None => true,
            Some(ahead) => self.level.rejects_blocked_split() && self.grid.is_marked(ahead),
        };
        !ahead_blocked
    }
}

/// Count Hamiltonian paths on an n×n grid at a numeric pruning level.
///
/// This is the plain-integer front door; [`PathCounter`] is the typed one.
pub fn count_hamiltonian_paths(n: usize, pruning_level: u8) -> Result<u64, CounterError> {
    let level =
        PruningLevel::from_index(pruning_level).ok_or(CounterError::UnknownLevel(pruning_level))?;
    Ok(PathCounter::new(n, level)?.run().paths)
}
