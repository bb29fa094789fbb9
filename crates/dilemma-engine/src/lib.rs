//! Core game logic for the Iterated Prisoner's Dilemma
//!
//! Two strategies play a fixed number of rounds. Each round both sides
//! move simultaneously, the payoff matrix scores the pair, and each
//! side infers what its opponent played from its own score alone.
//! Everything is deterministic given a seed; the engine has no other
//! source of randomness.
//!
//! The presentation layer (CLI, charting) lives elsewhere and only
//! consumes the final pair of [`StrategyRecord`]s.

mod error;
mod game;
mod payoff;
mod random;
mod record;
mod strategy;

pub use error::MatchError;
pub use game::{initiate_match, initiate_match_with, winner, Verdict};
pub use payoff::{settle, Outcome, PayoffConfig, Settlement};
pub use random::SeededRng;
pub use record::StrategyRecord;
pub use strategy::{next_move, Move, StrategyId};
