mod legal;
mod select;
mod uncertainty;

pub use legal::{LegalMoves, compute_legal_moves};
pub use select::{Certainty, Decision, MoveSelector};
pub use uncertainty::{UncertaintyCount, UncertaintyTable, uncertainty};

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BotDifficulty {
    /// Lay the first legal card found.
    EasyFirstLegal,
    /// Lay the legal card bordering the widest hidden gap.
    #[default]
    NormalUncertainty,
}

impl BotDifficulty {
    /// Level named by `SAAT_BOT_DIFFICULTY`, if it is set and parses.
    pub fn from_env() -> Option<Self> {
        Self::from_reader(|key| std::env::var(key).ok())
    }

    fn from_reader<F>(mut read: F) -> Option<Self>
    where
        F: FnMut(&str) -> Option<String>,
    {
        read("SAAT_BOT_DIFFICULTY").and_then(|raw| raw.parse().ok())
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            BotDifficulty::EasyFirstLegal => "easy",
            BotDifficulty::NormalUncertainty => "normal",
        }
    }
}

impl FromStr for BotDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "first" => Ok(BotDifficulty::EasyFirstLegal),
            "normal" | "heuristic" | "default" => Ok(BotDifficulty::NormalUncertainty),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}
