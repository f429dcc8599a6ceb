use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SaatError;

/// Card value within a suite. Ranks run 1 to 13 with no face-card names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const MIN: Rank = Rank(1);
    pub const MAX: Rank = Rank(13);
    /// Every run in a suite starts from the seven.
    pub const SEVEN: Rank = Rank(7);

    pub const fn from_value(value: u8) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Rank(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_seven(self) -> bool {
        self.0 == Self::SEVEN.0
    }

    /// The rank one below, if any.
    pub const fn below(self) -> Option<Self> {
        Self::from_value(self.0 - 1)
    }

    /// The rank one above, if any.
    pub const fn above(self) -> Option<Self> {
        Self::from_value(self.0 + 1)
    }

    pub fn ordered() -> impl Iterator<Item = Rank> {
        (Self::MIN.0..=Self::MAX.0).map(Rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = SaatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::from_value(value).ok_or(SaatError::InvalidRank(value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Rank;

    #[test]
    fn from_value_maps() {
        assert_eq!(Rank::from_value(7), Some(Rank::SEVEN));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn neighbours_stop_at_the_edges() {
        assert_eq!(Rank::MIN.below(), None);
        assert_eq!(Rank::MAX.above(), None);
        assert_eq!(Rank::SEVEN.below().map(Rank::value), Some(6));
        assert_eq!(Rank::SEVEN.above().map(Rank::value), Some(8));
    }

    #[test]
    fn display_is_numeric() {
        assert_eq!(Rank::from_value(13).unwrap().to_string(), "13");
        assert_eq!(Rank::MIN.to_string(), "1");
    }

    #[test]
    fn deserialization_rejects_out_of_range() {
        assert!(serde_json::from_str::<Rank>("0").is_err());
        assert_eq!(serde_json::from_str::<Rank>("10").unwrap().value(), 10);
    }

    #[test]
    fn ordered_covers_every_rank() {
        assert_eq!(Rank::ordered().count(), 13);
    }
}
