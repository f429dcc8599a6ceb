use crate::error::SaatError;
use crate::model::rank::Rank;
use crate::model::suite::Suite;
use indexmap::IndexMap;

/// Contiguous run of ranks already on the table in one suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayedRange {
    low: Rank,
    high: Rank,
}

impl PlayedRange {
    /// Range of a suite nobody has opened yet.
    pub const ANCHOR: PlayedRange = PlayedRange {
        low: Rank::SEVEN,
        high: Rank::SEVEN,
    };

    /// Validate `low <= 7 <= high` with both ends inside 1..=13.
    pub fn new(suite: Suite, low: u8, high: u8) -> Result<Self, SaatError> {
        let malformed = SaatError::MalformedRange { suite, low, high };
        let (Some(lo), Some(hi)) = (Rank::from_value(low), Rank::from_value(high)) else {
            return Err(malformed);
        };
        if lo > hi || lo > Rank::SEVEN || hi < Rank::SEVEN {
            return Err(malformed);
        }
        Ok(Self { low: lo, high: hi })
    }

    pub const fn low(self) -> Rank {
        self.low
    }

    pub const fn high(self) -> Rank {
        self.high
    }

    /// True when `rank` sits directly next to either end of the run.
    pub fn is_extended_by(self, rank: Rank) -> bool {
        self.low.below() == Some(rank) || self.high.above() == Some(rank)
    }
}

/// Played ranges for every suite that has been opened, in caller order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayedRanges {
    ranges: IndexMap<Suite, PlayedRange>,
}

impl PlayedRanges {
    pub fn new() -> Self {
        Self {
            ranges: IndexMap::new(),
        }
    }

    pub fn from_values<I>(entries: I) -> Result<Self, SaatError>
    where
        I: IntoIterator<Item = (Suite, (u8, u8))>,
    {
        let mut table = Self::new();
        for (suite, (low, high)) in entries {
            table.insert(suite, low, high)?;
        }
        Ok(table)
    }

    /// Record the run for `suite`, replacing any earlier entry in place.
    pub fn insert(&mut self, suite: Suite, low: u8, high: u8) -> Result<(), SaatError> {
        let range = PlayedRange::new(suite, low, high)?;
        self.ranges.insert(suite, range);
        Ok(())
    }

    pub fn get(&self, suite: Suite) -> Option<PlayedRange> {
        self.ranges.get(&suite).copied()
    }

    /// The recorded range, or the bare anchor `(7, 7)` for an untouched suite.
    pub fn range_or_anchor(&self, suite: Suite) -> PlayedRange {
        self.get(suite).unwrap_or(PlayedRange::ANCHOR)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Suite, PlayedRange)> + '_ {
        self.ranges.iter().map(|(suite, range)| (*suite, *range))
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{PlayedRange, PlayedRanges};
    use crate::error::SaatError;
    use crate::model::rank::Rank;
    use crate::model::suite::Suite;

    #[test]
    fn rejects_inverted_range() {
        let err = PlayedRange::new(Suite::Heart, 9, 3).unwrap_err();
        assert_eq!(
            err,
            SaatError::MalformedRange {
                suite: Suite::Heart,
                low: 9,
                high: 3
            }
        );
    }

    #[test]
    fn rejects_range_missing_the_anchor() {
        assert!(PlayedRange::new(Suite::Club, 8, 10).is_err());
        assert!(PlayedRange::new(Suite::Club, 2, 6).is_err());
        assert!(PlayedRange::new(Suite::Club, 0, 7).is_err());
        assert!(PlayedRange::new(Suite::Club, 7, 14).is_err());
    }

    #[test]
    fn extension_is_one_past_either_end() {
        let range = PlayedRange::new(Suite::Spade, 6, 8).unwrap();
        let rank = |v| Rank::from_value(v).unwrap();
        assert!(range.is_extended_by(rank(5)));
        assert!(range.is_extended_by(rank(9)));
        assert!(!range.is_extended_by(rank(7)));
        assert!(!range.is_extended_by(rank(4)));
    }

    #[test]
    fn full_suite_has_no_extension() {
        let range = PlayedRange::new(Suite::Spade, 1, 13).unwrap();
        assert!(Rank::ordered().all(|rank| !range.is_extended_by(rank)));
    }

    #[test]
    fn untouched_suite_defaults_to_anchor() {
        let table = PlayedRanges::from_values([(Suite::Spade, (6, 8))]).unwrap();
        assert_eq!(table.range_or_anchor(Suite::Diamond), PlayedRange::ANCHOR);
        assert_eq!(table.range_or_anchor(Suite::Spade).low().value(), 6);
    }

    #[test]
    fn preserves_insertion_order() {
        let table =
            PlayedRanges::from_values([(Suite::Club, (3, 10)), (Suite::Spade, (7, 8))]).unwrap();
        let suites: Vec<_> = table.iter().map(|(suite, _)| suite).collect();
        assert_eq!(suites, vec![Suite::Club, Suite::Spade]);
    }
}
