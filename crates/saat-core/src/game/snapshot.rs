use crate::error::SaatError;
use crate::model::hand::Hand;
use crate::model::played::PlayedRanges;
use crate::model::suite::Suite;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Serializable form of one decision point: the table and the hand.
///
/// Ranks stay raw integers here so a snapshot can be read before it is
/// checked; [`DecisionSnapshot::into_parts`] does the validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecisionSnapshot {
    #[serde(default)]
    pub played: IndexMap<Suite, [u8; 2]>,
    #[serde(default)]
    pub hand: IndexMap<Suite, Vec<u8>>,
}

impl DecisionSnapshot {
    pub fn capture(played: &PlayedRanges, hand: &Hand) -> Self {
        DecisionSnapshot {
            played: played
                .iter()
                .map(|(suite, range)| (suite, [range.low().value(), range.high().value()]))
                .collect(),
            hand: hand
                .iter()
                .map(|(suite, ranks)| (suite, ranks.iter().map(|rank| rank.value()).collect()))
                .collect(),
        }
    }

    pub fn into_parts(self) -> Result<(PlayedRanges, Hand), SaatError> {
        let played = PlayedRanges::from_values(
            self.played
                .into_iter()
                .map(|(suite, [low, high])| (suite, (low, high))),
        )?;
        let hand = Hand::from_values(self.hand)?;
        Ok((played, hand))
    }

    pub fn to_json(played: &PlayedRanges, hand: &Hand) -> serde_json::Result<String> {
        let snapshot = Self::capture(played, hand);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
