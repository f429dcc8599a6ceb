//! Sample late-game deal for trying the selector without a config file.

use indexmap::IndexMap;
use saat_core::game::snapshot::DecisionSnapshot;
use saat_core::model::suite::Suite;

pub fn demo_snapshot() -> DecisionSnapshot {
    let played = IndexMap::from([
        (Suite::Heart, [1, 11]),
        (Suite::Spade, [1, 13]),
        (Suite::Club, [3, 12]),
        (Suite::Diamond, [3, 7]),
    ]);
    let hand = IndexMap::from([
        (Suite::Spade, vec![5]),
        (Suite::Heart, vec![1, 2, 4, 6]),
        (Suite::Club, vec![13]),
        (Suite::Diamond, vec![1, 2, 9, 13]),
    ]);
    DecisionSnapshot { played, hand }
}
