use thiserror::Error;

use crate::model::suite::Suite;

/// Errors raised when a decision is fed inconsistent inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaatError {
    #[error("no cards held in {suite} to estimate uncertainty from")]
    InvalidArgument { suite: Suite },
    #[error("malformed played range for {suite}: [{low}, {high}] must satisfy 1 <= low <= 7 <= high <= 13")]
    MalformedRange { suite: Suite, low: u8, high: u8 },
    #[error("rank {0} is outside 1..=13")]
    InvalidRank(u8),
}
