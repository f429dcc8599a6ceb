use crate::model::card::Card;
use core::fmt;

/// Outcome of a single decision: a card to lay down or a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Play(Card),
    Pass,
}

impl Move {
    pub const fn card(self) -> Option<Card> {
        match self {
            Move::Play(card) => Some(card),
            Move::Pass => None,
        }
    }

    pub const fn is_pass(self) -> bool {
        matches!(self, Move::Pass)
    }
}

impl From<Card> for Move {
    fn from(card: Card) -> Self {
        Move::Play(card)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play(card) => write!(f, "{card}"),
            Move::Pass => f.write_str("pass"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::suite::Suite;

    #[test]
    fn pass_displays_literal() {
        assert_eq!(Move::Pass.to_string(), "pass");
        assert!(Move::Pass.is_pass());
        assert_eq!(Move::Pass.card(), None);
    }

    #[test]
    fn play_exposes_card() {
        let card = Card::new(Rank::SEVEN, Suite::Diamond);
        let mv = Move::from(card);
        assert_eq!(mv.card(), Some(card));
        assert_eq!(mv.to_string(), "7 of Diamond");
    }
}
