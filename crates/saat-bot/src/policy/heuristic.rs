use super::{Policy, PolicyContext};
use crate::bot::{BotDifficulty, Certainty, Decision, LegalMoves, MoveSelector};
use saat_core::SaatError;
use tracing::{Level, event};

/// Adapter that runs the [`MoveSelector`] at a given difficulty
pub struct HeuristicPolicy {
    difficulty: BotDifficulty,
}

impl HeuristicPolicy {
    pub fn new(difficulty: BotDifficulty) -> Self {
        Self { difficulty }
    }

    pub fn easy() -> Self {
        Self::new(BotDifficulty::EasyFirstLegal)
    }

    pub fn normal() -> Self {
        Self::new(BotDifficulty::NormalUncertainty)
    }
}

impl Default for HeuristicPolicy {
    fn default() -> Self {
        Self::normal()
    }
}

impl Policy for HeuristicPolicy {
    fn name(&self) -> &'static str {
        self.difficulty.as_str()
    }

    fn choose(&mut self, ctx: &PolicyContext) -> Result<Decision, SaatError> {
        let selector = MoveSelector::new(ctx.played, ctx.hand);
        let legal = selector.legal_moves();

        // For EasyFirstLegal, just return first legal card
        if matches!(self.difficulty, BotDifficulty::EasyFirstLegal) {
            let mv = selector.first_legal();
            let decision = Decision {
                mv,
                certainty: if mv.is_pass() {
                    Certainty::Pass
                } else {
                    Certainty::Definite
                },
                max_uncertainty: 0,
                legal_count: legal.len(),
                cards_in_hand: ctx.hand.card_count(),
            };
            log_play_decision(self.difficulty, &legal, &decision, "easy_first_legal");
            return Ok(decision);
        }

        let decision = selector.decide()?;
        let reason = match decision.certainty {
            Certainty::Pass => "no_legal_card",
            Certainty::Definite => "definite_fallback",
            Certainty::NotDefinite => "max_uncertainty",
        };
        log_play_decision(self.difficulty, &legal, &decision, reason);
        Ok(decision)
    }
}

fn log_play_decision(
    difficulty: BotDifficulty,
    legal_moves: &LegalMoves,
    decision: &Decision,
    reason: &str,
) {
    if !tracing::enabled!(Level::INFO) {
        return;
    }

    let choice = decision
        .mv
        .card()
        .map_or_else(|| "pass".to_string(), |card| card.code());
    let legal_preview = if legal_moves.len() <= 6 {
        legal_moves
            .cards()
            .map(|card| card.code())
            .collect::<Vec<_>>()
            .join(",")
    } else {
        format!("{} moves", legal_moves.len())
    };

    event!(
        target: "saat_bot::play",
        Level::INFO,
        difficulty = difficulty.as_str(),
        hand_size = decision.cards_in_hand,
        legal_count = decision.legal_count,
        legal_moves = %legal_preview,
        chosen = %choice,
        certainty = decision.certainty.as_str(),
        max_uncertainty = decision.max_uncertainty,
        reason,
    );
}
