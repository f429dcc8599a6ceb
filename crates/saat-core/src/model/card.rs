use crate::model::rank::Rank;
use crate::model::suite::Suite;
use core::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suite: Suite,
}

impl Card {
    pub const fn new(rank: Rank, suite: Suite) -> Self {
        Self { rank, suite }
    }

    pub const fn is_seven(self) -> bool {
        self.rank.is_seven()
    }

    /// Short form such as `7d`, handy for log lines.
    pub fn code(self) -> String {
        format!("{}{}", self.rank, self.suite.code())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suite)
    }
}
