use crate::counter::{CounterError, PathCounter};
use crate::pruning::PruningLevel;

/// Builder for [`PathCounter`], defaulting to the strongest pruning level.
#[derive(Debug)]
pub struct PathCounterBuilder {
    n: usize,
    level: PruningLevel,
}

impl PathCounterBuilder {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            level: PruningLevel::BlockedSplit,
        }
    }

    pub fn with_level(mut self, level: PruningLevel) -> Self {
        self.level = level;
        self
    }

    /// Select the level by its numeric index.
    pub fn with_level_index(mut self, index: u8) -> Result<Self, CounterError> {
        self.level = PruningLevel::from_index(index).ok_or(CounterError::UnknownLevel(index))?;
        Ok(self)
    }

    pub fn build(self) -> Result<PathCounter, CounterError> {
        PathCounter::new(self.n, self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_strongest_level() {
        let counter = PathCounterBuilder::new(3).build().unwrap();
        assert_eq!(counter.level(), PruningLevel::BlockedSplit);
        assert_eq!(counter.size(), 3);
    }

    #[test]
    fn level_index_is_validated() {
        let err = PathCounterBuilder::new(3).with_level_index(7).unwrap_err();
        assert_eq!(err, CounterError::UnknownLevel(7));
        let counter = PathCounterBuilder::new(3)
            .with_level_index(0)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(counter.level(), PruningLevel::None);
    }
}
