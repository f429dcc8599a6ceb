use saat_bot::policy::{HeuristicPolicy, Policy, PolicyContext};
use saat_bot::{BotDifficulty, Decision};
use saat_core::SaatError;
use saat_core::model::hand::Hand;
use saat_core::model::played::PlayedRanges;
use serde::Serialize;
use thiserror::Error;
use tracing::{Level, event};

use crate::config::{DecisionConfig, ValidationError};
use crate::narrator::{NarrationError, Narrator, sentence};

/// Runs one decision from a validated configuration.
pub struct DecisionRunner {
    played: PlayedRanges,
    hand: Hand,
    policy: Box<dyn Policy>,
}

/// Decision rendered at the output boundary, with suite display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionReport {
    #[serde(rename = "move")]
    pub kind: &'static str,
    pub card: Option<u8>,
    pub suite: Option<&'static str>,
    pub sentence: String,
    pub certainty: &'static str,
    pub max_uncertainty: u8,
    pub legal_count: usize,
    pub cards_in_hand: usize,
    pub policy: &'static str,
}

impl DecisionReport {
    fn new(decision: &Decision, policy: &'static str) -> Self {
        let card = decision.mv.card();
        Self {
            kind: if card.is_some() { "play" } else { "pass" },
            card: card.map(|card| card.rank.value()),
            suite: card.map(|card| card.suite.name()),
            sentence: sentence(&decision.mv),
            certainty: decision.certainty.as_str(),
            max_uncertainty: decision.max_uncertainty,
            legal_count: decision.legal_count,
            cards_in_hand: decision.cards_in_hand,
            policy,
        }
    }
}

impl DecisionRunner {
    pub fn new(config: &DecisionConfig) -> Result<Self, RunnerError> {
        Self::with_difficulty(config, config.difficulty()?)
    }

    pub fn with_difficulty(
        config: &DecisionConfig,
        difficulty: BotDifficulty,
    ) -> Result<Self, RunnerError> {
        let (played, hand) = config.deal()?;
        Ok(Self {
            played,
            hand,
            policy: Box::new(HeuristicPolicy::new(difficulty)),
        })
    }

    pub fn decide(&mut self) -> Result<(Decision, DecisionReport), RunnerError> {
        let ctx = PolicyContext {
            played: &self.played,
            hand: &self.hand,
        };
        let decision = self.policy.choose(&ctx)?;
        let report = DecisionReport::new(&decision, self.policy.name());

        event!(
            target: "saat_cli::decision",
            Level::DEBUG,
            policy = report.policy,
            kind = report.kind,
            sentence = %report.sentence,
        );

        Ok((decision, report))
    }

    /// Decide, then hand the move to the narrator.
    pub fn decide_and_narrate(
        &mut self,
        narrator: &mut dyn Narrator,
    ) -> Result<DecisionReport, RunnerError> {
        let (decision, report) = self.decide()?;
        narrator.narrate(&decision.mv)?;
        Ok(report)
    }
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("{0}")]
    Config(#[from] ValidationError),
    #[error("decision failed: {0}")]
    Decision(#[from] SaatError),
    #[error("{0}")]
    Narration(#[from] NarrationError),
}
