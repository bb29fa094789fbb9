//! Strategy definitions and execution

use serde::{Deserialize, Serialize};

use crate::random::SeededRng;

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Cooperate,
    Defect,
}

/// Built-in strategy identifiers
///
/// Adding a strategy means adding a variant here, an arm in
/// [`next_move`], and an id in [`StrategyId::from_id`]. The payoff,
/// round, and match code never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyId {
    /// Always cooperate, never defect.
    Sucker,
    /// Always defect, never cooperate.
    Cheat,
    /// Copy the opponent's last inferred move. Start with cooperate.
    TitForTat,
    /// Cooperate until the opponent is ever believed to have defected,
    /// then defect forever. The transition is one-way.
    Grudger,
    /// Fair coin flip each round.
    Random,
    /// Win-stay, lose-shift: cooperate on round 1, then cooperate
    /// exactly when last round's own move matched the inferred
    /// opponent move.
    Pavlov,
}

impl StrategyId {
    /// Every built-in strategy, in registry order
    pub const ALL: [StrategyId; 6] = [
        StrategyId::Sucker,
        StrategyId::Cheat,
        StrategyId::TitForTat,
        StrategyId::Grudger,
        StrategyId::Random,
        StrategyId::Pavlov,
    ];

    /// Resolve a string identifier to a strategy
    ///
    /// `cheat` and `defector` are aliases for the same strategy.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "sucker" => Some(StrategyId::Sucker),
            "cheat" | "defector" => Some(StrategyId::Cheat),
            "tit-for-tat" => Some(StrategyId::TitForTat),
            "grudger" => Some(StrategyId::Grudger),
            "random" => Some(StrategyId::Random),
            "pavlov" => Some(StrategyId::Pavlov),
            _ => None,
        }
    }

    /// Canonical string identifier
    pub fn id(&self) -> &'static str {
        match self {
            StrategyId::Sucker => "sucker",
            StrategyId::Cheat => "cheat",
            StrategyId::TitForTat => "tit-for-tat",
            StrategyId::Grudger => "grudger",
            StrategyId::Random => "random",
            StrategyId::Pavlov => "pavlov",
        }
    }
}

impl core::fmt::Display for StrategyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.id())
    }
}

/// Execute a strategy for one round
///
/// Strategies never see the opponent's actual moves. They see only
/// `beliefs` — the moves this side inferred from its own payoffs —
/// and their own `moves`. That indirection is deliberate: it models
/// imperfect information and must not be shortcut into direct access
/// to the opponent's record.
///
/// # Arguments
/// * `identity` - The strategy to execute
/// * `beliefs` - Inferred opponent moves, one per completed round
/// * `moves` - Our own past moves
/// * `rng` - Random number generator for this side's draw this round
pub fn next_move(
    identity: StrategyId,
    beliefs: &[Move],
    moves: &[Move],
    rng: &mut SeededRng,
) -> Move {
    match identity {
        StrategyId::Sucker => Move::Cooperate,
        StrategyId::Cheat => Move::Defect,
        StrategyId::TitForTat => beliefs.last().copied().unwrap_or(Move::Cooperate),
        StrategyId::Grudger => {
            if beliefs.contains(&Move::Defect) {
                Move::Defect
            } else {
                Move::Cooperate
            }
        }
        StrategyId::Random => {
            if rng.coin() {
                Move::Cooperate
            } else {
                Move::Defect
            }
        }
        StrategyId::Pavlov => match (moves.last(), beliefs.last()) {
            (Some(mine), Some(theirs)) if mine == theirs => Move::Cooperate,
            (Some(_), Some(_)) => Move::Defect,
            // Round 1: nothing to compare against yet
            _ => Move::Cooperate,
        },
    }
}
