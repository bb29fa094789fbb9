//! Per-side match state
//!
//! A [`StrategyRecord`] is one side's complete view of a match: its
//! identity, the payoffs it received, the moves it played, and the
//! moves it believes its opponent played. All three logs are
//! append-only and updates are functional — callers get a new record
//! back, they never mutate one in place.

use serde::{Deserialize, Serialize};

use crate::strategy::{Move, StrategyId};

/// One side's record of a match
///
/// Between rounds `points`, `moves`, and `beliefs` all have length
/// equal to the number of completed rounds. A record is created empty
/// at match start and discarded once the summary is extracted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyRecord {
    identity: StrategyId,
    points: Vec<i64>,
    moves: Vec<Move>,
    beliefs: Vec<Move>,
}

impl StrategyRecord {
    /// Create an empty record for a strategy
    pub fn new(identity: StrategyId) -> Self {
        Self {
            identity,
            points: Vec::new(),
            moves: Vec::new(),
            beliefs: Vec::new(),
        }
    }

    /// The strategy this record belongs to (immutable for its lifetime)
    pub fn identity(&self) -> StrategyId {
        self.identity
    }

    /// Per-round payoffs received so far
    pub fn points(&self) -> &[i64] {
        &self.points
    }

    /// Our own past moves
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Inferred opponent moves, one per completed round
    pub fn beliefs(&self) -> &[Move] {
        &self.beliefs
    }

    /// Rounds completed by this side
    pub fn rounds_played(&self) -> usize {
        self.points.len()
    }

    /// Functional update: the same record with `mv` appended to `moves`
    ///
    /// Leaves the record one move ahead of its points/beliefs until
    /// [`with_settlement`](Self::with_settlement) closes the round.
    pub(crate) fn with_move(mut self, mv: Move) -> Self {
        self.moves.push(mv);
        self
    }

    /// Functional update: append this round's score and inferred
    /// opponent move, closing the round
    pub(crate) fn with_settlement(mut self, score: i64, belief: Move) -> Self {
        self.points.push(score);
        self.beliefs.push(belief);
        self
    }

    /// Cumulative score after each round (prefix sums of `points`)
    pub fn running_score(&self) -> Vec<i64> {
        self.points
            .iter()
            .scan(0i64, |acc, p| {
                *acc += p;
                Some(*acc)
            })
            .collect()
    }

    /// Final score: the sum of all `points`
    pub fn total(&self) -> i64 {
        self.points.iter().sum()
    }
}
