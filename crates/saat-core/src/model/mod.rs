pub mod card;
pub mod hand;
pub mod moves;
pub mod played;
pub mod rank;
pub mod suite;
