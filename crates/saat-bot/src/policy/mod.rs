mod heuristic;

pub use heuristic::HeuristicPolicy;

use crate::bot::Decision;
use saat_core::SaatError;
use saat_core::model::hand::Hand;
use saat_core::model::played::PlayedRanges;

/// Context provided to policies for decision-making
pub struct PolicyContext<'a> {
    pub played: &'a PlayedRanges,
    pub hand: &'a Hand,
}

/// Interface for choosing the next card
pub trait Policy: Send {
    /// Short label used in logs
    fn name(&self) -> &'static str;

    /// Choose the card to lay down, or pass
    fn choose(&mut self, ctx: &PolicyContext) -> Result<Decision, SaatError>;
}
