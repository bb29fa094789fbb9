//! Error taxonomy for match initiation
//!
//! Every precondition is checkable before any round runs, so all
//! errors surface synchronously from `initiate_match` and nothing is
//! recovered mid-match.

/// Errors rejected at match initiation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchError {
    /// An identifier has no registered decision function.
    UnknownStrategy(String),
    /// A negative round count was supplied.
    InvalidRoundCount(i64),
    /// Payoff constants violate the required ordering invariant.
    InvalidPayoffConfiguration { reason: &'static str },
}

impl core::fmt::Display for MatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatchError::UnknownStrategy(id) => write!(f, "unknown strategy '{}'", id),
            MatchError::InvalidRoundCount(n) => {
                write!(f, "round count must be non-negative, got {}", n)
            }
            MatchError::InvalidPayoffConfiguration { reason } => {
                write!(f, "invalid payoff configuration: {}", reason)
            }
        }
    }
}

impl std::error::Error for MatchError {}
