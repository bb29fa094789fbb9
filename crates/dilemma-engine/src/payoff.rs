//! Payoff matrix, outcome classification, and belief inference

use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::strategy::Move;

/// The four configurable payoff constants
///
/// Defaults are the classic 0/1/3/5 matrix. Any override must keep
/// `backstabber > partner > defector > sucker` and
/// `2*partner > backstabber + sucker`; [`PayoffConfig::validate`]
/// rejects anything else before a match starts, and the config is
/// immutable for the lifetime of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffConfig {
    /// Cooperated while the opponent defected.
    pub sucker: i64,
    /// Both sides defected.
    pub defector: i64,
    /// Both sides cooperated.
    pub partner: i64,
    /// Defected against a cooperator.
    pub backstabber: i64,
}

impl Default for PayoffConfig {
    fn default() -> Self {
        Self {
            sucker: 0,
            defector: 1,
            partner: 3,
            backstabber: 5,
        }
    }
}

impl PayoffConfig {
    /// Check the dilemma ordering invariant
    ///
    /// Belief inference (own payoff below `partner` means the opponent
    /// defected) is only sound under this ordering, which is why it is
    /// enforced here rather than left to the caller.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !(self.backstabber > self.partner
            && self.partner > self.defector
            && self.defector > self.sucker)
        {
            return Err(MatchError::InvalidPayoffConfiguration {
                reason: "payoffs must satisfy backstabber > partner > defector > sucker",
            });
        }
        if 2 * self.partner <= self.backstabber + self.sucker {
            return Err(MatchError::InvalidPayoffConfiguration {
                reason: "mutual cooperation must beat alternating betrayal \
                         (2*partner > backstabber + sucker)",
            });
        }
        Ok(())
    }
}

/// Outcome of one simultaneous move pair
///
/// The four cases are exhaustive and mutually exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    MutualCooperation,
    MutualDefection,
    /// A defected on a cooperating B.
    BetrayalByA,
    /// B defected on a cooperating A.
    BetrayalByB,
}

impl Outcome {
    /// Classify a move pair
    pub fn classify(a: Move, b: Move) -> Self {
        match (a, b) {
            (Move::Cooperate, Move::Cooperate) => Outcome::MutualCooperation,
            (Move::Defect, Move::Defect) => Outcome::MutualDefection,
            (Move::Defect, Move::Cooperate) => Outcome::BetrayalByA,
            (Move::Cooperate, Move::Defect) => Outcome::BetrayalByB,
        }
    }
}

/// Scores and inferred beliefs produced by settling one round
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub score_a: i64,
    pub score_b: i64,
    /// What A infers B played.
    pub belief_a: Move,
    /// What B infers A played.
    pub belief_b: Move,
}

/// Settle one round: classify the move pair, score both sides, and
/// infer each side's belief about its opponent
///
/// Beliefs are recomputed from each side's own score, never copied
/// from the opponent's move. This never reads or writes either side's
/// move history.
pub fn settle(a: Move, b: Move, payoffs: &PayoffConfig) -> Settlement {
    let (score_a, score_b) = match Outcome::classify(a, b) {
        Outcome::MutualCooperation => (payoffs.partner, payoffs.partner),
        Outcome::MutualDefection => (payoffs.defector, payoffs.defector),
        Outcome::BetrayalByA => (payoffs.backstabber, payoffs.sucker),
        Outcome::BetrayalByB => (payoffs.sucker, payoffs.backstabber),
    };
    Settlement {
        score_a,
        score_b,
        belief_a: infer(score_a, payoffs),
        belief_b: infer(score_b, payoffs),
    }
}

/// A side infers its opponent defected iff its own payoff came in
/// strictly below the partner payoff
fn infer(own_score: i64, payoffs: &PayoffConfig) -> Move {
    if own_score < payoffs.partner {
        Move::Defect
    } else {
        Move::Cooperate
    }
}
