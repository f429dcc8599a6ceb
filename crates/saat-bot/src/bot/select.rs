use super::legal::{LegalMoves, compute_legal_moves};
use super::uncertainty::{UncertaintyCount, UncertaintyTable, uncertainty};
use saat_core::SaatError;
use saat_core::model::card::Card;
use saat_core::model::hand::Hand;
use saat_core::model::moves::Move;
use saat_core::model::played::PlayedRanges;
use saat_core::model::suite::Suite;
use tracing::{Level, event};

/// How much a decision gives away to the other players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Certainty {
    /// Nothing was legal.
    Pass,
    /// Every legal card hides nothing, so the first one was taken.
    Definite,
    /// The chosen card borders a gap an opponent may be holding.
    NotDefinite,
}

impl Certainty {
    pub const fn as_str(self) -> &'static str {
        match self {
            Certainty::Pass => "pass",
            Certainty::Definite => "definite",
            Certainty::NotDefinite => "not_definite",
        }
    }
}

/// A move together with what led to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub mv: Move,
    pub certainty: Certainty,
    pub max_uncertainty: u8,
    pub legal_count: usize,
    pub cards_in_hand: usize,
}

/// Picks the next card for one decision point.
///
/// The selector only borrows the table and the hand; each call recomputes
/// everything from them.
#[derive(Debug, Clone, Copy)]
pub struct MoveSelector<'a> {
    played: &'a PlayedRanges,
    hand: &'a Hand,
}

impl<'a> MoveSelector<'a> {
    pub fn new(played: &'a PlayedRanges, hand: &'a Hand) -> Self {
        Self { played, hand }
    }

    pub fn legal_moves(&self) -> LegalMoves {
        compute_legal_moves(self.played, self.hand)
    }

    pub fn uncertainty(&self, suite: Suite) -> Result<UncertaintyCount, SaatError> {
        uncertainty(self.played, self.hand, suite)
    }

    pub fn uncertainty_table(&self) -> Result<UncertaintyTable, SaatError> {
        UncertaintyTable::compute(self.played, self.hand)
    }

    pub fn pick_optimal_card(&self) -> Result<Move, SaatError> {
        self.decide().map(|decision| decision.mv)
    }

    /// First legal card in discovery order, or a pass.
    pub fn first_legal(&self) -> Move {
        self.legal_moves().first().map_or(Move::Pass, Move::Play)
    }

    pub fn decide(&self) -> Result<Decision, SaatError> {
        let legal = self.legal_moves();
        let cards_in_hand = self.hand.card_count();
        if legal.is_empty() {
            return Ok(Decision {
                mv: Move::Pass,
                certainty: Certainty::Pass,
                max_uncertainty: 0,
                legal_count: 0,
                cards_in_hand,
            });
        }

        let table = self.uncertainty_table()?;
        let best = pick_maximally_uncertain(&table, &legal);
        log_uncertainty(&table, best);

        let decision = match best {
            Some((card, score)) => Decision {
                mv: Move::Play(card),
                certainty: Certainty::NotDefinite,
                max_uncertainty: score,
                legal_count: legal.len(),
                cards_in_hand,
            },
            None => Decision {
                mv: legal.first().map_or(Move::Pass, Move::Play),
                certainty: Certainty::Definite,
                max_uncertainty: 0,
                legal_count: legal.len(),
                cards_in_hand,
            },
        };
        Ok(decision)
    }
}

/// Highest scoring legal card, `None` when every score is zero.
///
/// Only a strictly higher score displaces the current best, so the first
/// card to reach the maximum wins.
fn pick_maximally_uncertain(table: &UncertaintyTable, legal: &LegalMoves) -> Option<(Card, u8)> {
    let mut best: Option<(Card, u8)> = None;
    for card in legal.cards() {
        let score = table.score(card.suite, card.rank);
        let current = best.map_or(0, |(_, value)| value);
        if score > current {
            best = Some((card, score));
        }
    }
    best
}

fn log_uncertainty(table: &UncertaintyTable, best: Option<(Card, u8)>) {
    if !tracing::enabled!(target: "saat_bot::uncertainty", Level::DEBUG) {
        return;
    }

    let counts = table
        .iter()
        .map(|(suite, count)| format!("{}:{}/{}", suite.code(), count.lower, count.upper))
        .collect::<Vec<_>>()
        .join(",");
    let best = best.map_or_else(|| "none".to_string(), |(card, _)| card.code());

    event!(
        target: "saat_bot::uncertainty",
        Level::DEBUG,
        counts = %counts,
        all_definite = table.all_definite(),
        best = %best,
    );
}
