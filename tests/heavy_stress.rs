#![cfg(feature = "heavy")]
use backprune::{PathCounter, PruningLevel};

#[test]
fn heavy_six_by_six_all_levels_agree() {
    let mut calls = Vec::new();
    for level in PruningLevel::ALL {
        let report = PathCounter::new(6, level).unwrap().run();
        assert_eq!(report.paths, 0, "level = {level}");
        calls.push(report.calls);
    }
    assert!(calls.windows(2).all(|w| w[1] <= w[0]), "calls grew: {calls:?}");
}

#[test]
fn heavy_seven_by_seven_known_count() {
    for level in [PruningLevel::WallSplit, PruningLevel::BlockedSplit] {
        let report = PathCounter::new(7, level).unwrap().run();
        assert_eq!(report.paths, 111_712, "level = {level}");
    }
}
