pub mod bot;
pub mod policy;

pub use bot::{
    BotDifficulty, Certainty, Decision, LegalMoves, MoveSelector, UncertaintyCount,
    UncertaintyTable, compute_legal_moves,
};
pub use policy::{HeuristicPolicy, Policy, PolicyContext};
