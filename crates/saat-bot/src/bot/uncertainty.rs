use indexmap::IndexMap;
use saat_core::SaatError;
use saat_core::model::hand::Hand;
use saat_core::model::played::PlayedRanges;
use saat_core::model::rank::Rank;
use saat_core::model::suite::Suite;

/// Ranks an opponent could be holding on each side of a suite's run.
///
/// `lower` counts ranks from the lowest held card up to (not including) the
/// run's low end that are missing from the hand; `upper` counts ranks past
/// the run's high end up to the highest held card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UncertaintyCount {
    pub lower: u8,
    pub upper: u8,
}

impl UncertaintyCount {
    /// Side of the count a legal rank reveals. Sevens never score.
    pub fn for_rank(self, rank: Rank) -> u8 {
        if rank < Rank::SEVEN {
            self.lower
        } else if rank > Rank::SEVEN {
            self.upper
        } else {
            0
        }
    }

    pub fn is_definite(self) -> bool {
        self.lower == 0 && self.upper == 0
    }
}

/// Uncertainty for one held suite.
pub fn uncertainty(
    played: &PlayedRanges,
    hand: &Hand,
    suite: Suite,
) -> Result<UncertaintyCount, SaatError> {
    let (lo_hand, hi_hand) = hand
        .extremes(suite)
        .ok_or(SaatError::InvalidArgument { suite })?;
    let range = played.range_or_anchor(suite);

    let lower = count_unheld(hand, suite, lo_hand.value()..range.low().value());
    let upper = count_unheld(hand, suite, (range.high().value() + 1)..=hi_hand.value());
    Ok(UncertaintyCount { lower, upper })
}

fn count_unheld(hand: &Hand, suite: Suite, values: impl Iterator<Item = u8>) -> u8 {
    let mut count = 0;
    for value in values {
        let held = Rank::from_value(value).is_some_and(|rank| hand.contains_rank(suite, rank));
        if !held {
            count += 1;
        }
    }
    count
}

/// Uncertainty for every suite in the hand, in hand order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UncertaintyTable {
    counts: IndexMap<Suite, UncertaintyCount>,
}

impl UncertaintyTable {
    pub fn compute(played: &PlayedRanges, hand: &Hand) -> Result<Self, SaatError> {
        let mut counts = IndexMap::new();
        for suite in hand.suites() {
            counts.insert(suite, uncertainty(played, hand, suite)?);
        }
        Ok(Self { counts })
    }

    pub fn get(&self, suite: Suite) -> Option<UncertaintyCount> {
        self.counts.get(&suite).copied()
    }

    /// Score of playing `rank` in `suite`; 0 for suites that are not held.
    pub fn score(&self, suite: Suite, rank: Rank) -> u8 {
        self.get(suite).map_or(0, |count| count.for_rank(rank))
    }

    /// True when no held suite hides anything on either side.
    pub fn all_definite(&self) -> bool {
        self.counts.values().all(|count| count.is_definite())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Suite, UncertaintyCount)> + '_ {
        self.counts.iter().map(|(suite, count)| (*suite, *count))
    }
}

#[cfg(test)]
mod tests {
    use super::{UncertaintyCount, UncertaintyTable, uncertainty};
    use saat_core::SaatError;
    use saat_core::model::hand::Hand;
    use saat_core::model::played::PlayedRanges;
    use saat_core::model::rank::Rank;
    use saat_core::model::suite::Suite;

    fn table() -> PlayedRanges {
        PlayedRanges::from_values([
            (Suite::Spade, (7, 8)),
            (Suite::Heart, (3, 9)),
            (Suite::Club, (3, 10)),
        ])
        .unwrap()
    }

    #[test]
    fn gaps_inside_the_upper_span_are_counted() {
        let hand = Hand::from_values([(Suite::Heart, vec![10, 13])]).unwrap();
        let count = uncertainty(&table(), &hand, Suite::Heart).unwrap();
        assert_eq!(count, UncertaintyCount { lower: 0, upper: 2 });
    }

    #[test]
    fn solid_block_below_the_run_is_definite() {
        let hand = Hand::from_values([(Suite::Spade, vec![6, 5, 4, 3, 2, 1])]).unwrap();
        let count = uncertainty(&table(), &hand, Suite::Spade).unwrap();
        assert!(count.is_definite());
    }

    #[test]
    fn lower_span_counts_missing_ranks() {
        let hand = Hand::from_values([(Suite::Spade, vec![2, 6])]).unwrap();
        let count = uncertainty(&table(), &hand, Suite::Spade).unwrap();
        // 3, 4 and 5 are missing between 2 and the low end at 7
        assert_eq!(count.lower, 3);
        assert_eq!(count.upper, 0);
    }

    #[test]
    fn untouched_suite_measures_from_the_anchor() {
        let hand = Hand::from_values([(Suite::Diamond, vec![1, 7, 13])]).unwrap();
        let count = uncertainty(&table(), &hand, Suite::Diamond).unwrap();
        assert_eq!(count, UncertaintyCount { lower: 5, upper: 5 });
    }

    #[test]
    fn cards_inside_the_run_do_not_count() {
        let hand = Hand::from_values([(Suite::Club, vec![5, 6])]).unwrap();
        let count = uncertainty(&table(), &hand, Suite::Club).unwrap();
        assert!(count.is_definite());
    }

    #[test]
    fn suite_not_held_is_invalid_argument() {
        let hand = Hand::from_values([(Suite::Heart, vec![10])]).unwrap();
        assert_eq!(
            uncertainty(&table(), &hand, Suite::Diamond).unwrap_err(),
            SaatError::InvalidArgument {
                suite: Suite::Diamond
            }
        );
    }

    #[test]
    fn rank_selects_its_side() {
        let count = UncertaintyCount { lower: 4, upper: 1 };
        let rank = |v| Rank::from_value(v).unwrap();
        assert_eq!(count.for_rank(rank(2)), 4);
        assert_eq!(count.for_rank(rank(12)), 1);
        assert_eq!(count.for_rank(Rank::SEVEN), 0);
    }

    #[test]
    fn table_follows_hand_order() {
        let hand =
            Hand::from_values([(Suite::Heart, vec![10, 13]), (Suite::Spade, vec![6])]).unwrap();
        let table = UncertaintyTable::compute(&table(), &hand).unwrap();
        let suites: Vec<_> = table.iter().map(|(suite, _)| suite).collect();
        assert_eq!(suites, vec![Suite::Heart, Suite::Spade]);
        assert!(!table.all_definite());
        assert_eq!(table.score(Suite::Heart, Rank::from_value(10).unwrap()), 2);
        assert_eq!(table.score(Suite::Club, Rank::from_value(11).unwrap()), 0);
    }
}
