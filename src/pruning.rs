//! Pruning configurations for the exhaustive path search.
//!
//! Levels are cumulative: each one keeps every rule of the levels below it
//! and adds a new guard, so the explored search space shrinks monotonically
//! while the reported count stays identical. The counter consults the level
//! through the predicate methods rather than matching on it, keeping the
//! search a single parameterized algorithm.

use std::fmt;

/// How aggressively the search discards branches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PruningLevel {
    /// Level 0: explore all four directions from every cell.
    None,
    /// Level 1: from the start cell explore only Down, then double the
    /// count. Every right-first path is the diagonal mirror of a down-first
    /// path.
    Mirror,
    /// Level 2: also abandon a branch the moment it reaches the goal cell
    /// with unvisited cells remaining.
    EarlyGoal,
    /// Level 3: also reject a move that runs into the outer wall while both
    /// lateral neighbors are still open. Such a move splits the unvisited
    /// region in two, and one path cannot cover both halves.
    WallSplit,
    /// Level 4: as `WallSplit`, but a visited cell ahead counts as a wall
    /// too.
    BlockedSplit,
}

impl PruningLevel {
    /// Every level, weakest first.
    pub const ALL: [PruningLevel; 5] = [
        PruningLevel::None,
        PruningLevel::Mirror,
        PruningLevel::EarlyGoal,
        PruningLevel::WallSplit,
        PruningLevel::BlockedSplit,
    ];

    /// Level for a numeric index in 0..=4.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Numeric index of this level.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub(crate) fn halves_by_mirror(self) -> bool {
        self >= PruningLevel::Mirror
    }

    pub(crate) fn rejects_early_goal(self) -> bool {
        self >= PruningLevel::EarlyGoal
    }

    pub(crate) fn rejects_wall_split(self) -> bool {
        self >= PruningLevel::WallSplit
    }

    pub(crate) fn rejects_blocked_split(self) -> bool {
        self >= PruningLevel::BlockedSplit
    }
}

impl fmt::Display for PruningLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PruningLevel::None => "none",
            PruningLevel::Mirror => "mirror",
            PruningLevel::EarlyGoal => "early-goal",
            PruningLevel::WallSplit => "wall-split",
            PruningLevel::BlockedSplit => "blocked-split",
        };
        f.write_str(name)
    }
}
