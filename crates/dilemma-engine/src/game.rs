//! Match execution engine
//!
//! Rounds are strictly sequential: each round's decision functions
//! read the result of all prior rounds, so round k+1 only starts once
//! round k's updated records exist. A round is atomic — both records
//! advance together or not at all.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::payoff::{settle, PayoffConfig};
use crate::random::SeededRng;
use crate::record::StrategyRecord;
use crate::strategy::{next_move, StrategyId};

/// Who won a match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Winner(StrategyId),
    Tie,
}

/// Compare final totals and report the higher-scoring side's identity
pub fn winner(a: &StrategyRecord, b: &StrategyRecord) -> Verdict {
    match a.total().cmp(&b.total()) {
        Ordering::Greater => Verdict::Winner(a.identity()),
        Ordering::Less => Verdict::Winner(b.identity()),
        Ordering::Equal => Verdict::Tie,
    }
}

/// Advance both records by exactly one round
fn play_round(
    a: StrategyRecord,
    b: StrategyRecord,
    payoffs: &PayoffConfig,
    rng_a: &mut SeededRng,
    rng_b: &mut SeededRng,
) -> (StrategyRecord, StrategyRecord) {
    let move_a = next_move(a.identity(), a.beliefs(), a.moves(), rng_a);
    let move_b = next_move(b.identity(), b.beliefs(), b.moves(), rng_b);

    let outcome = settle(move_a, move_b, payoffs);

    log::debug!(
        "round {}: {} played {:?} ({}), {} played {:?} ({})",
        a.rounds_played() + 1,
        a.identity(),
        move_a,
        outcome.score_a,
        b.identity(),
        move_b,
        outcome.score_b,
    );

    (
        a.with_move(move_a)
            .with_settlement(outcome.score_a, outcome.belief_a),
        b.with_move(move_b)
            .with_settlement(outcome.score_b, outcome.belief_b),
    )
}

/// Run a match with the default payoff matrix
///
/// See [`initiate_match_with`].
pub fn initiate_match(
    rounds: i64,
    id_a: &str,
    id_b: &str,
    seed: u64,
) -> Result<(StrategyRecord, StrategyRecord), MatchError> {
    initiate_match_with(rounds, id_a, id_b, &PayoffConfig::default(), seed)
}

/// Run a complete match between two strategies
///
/// Resolves both identifiers and validates every precondition before
/// the first round, then applies the round engine exactly `rounds`
/// times from freshly initialized records. `rounds = 0` returns the
/// two empty records untouched. The payoff configuration is fixed for
/// the whole match.
///
/// # Arguments
/// * `rounds` - Number of rounds to play; negative is rejected
/// * `id_a` - First strategy identifier, e.g. `"tit-for-tat"`
/// * `id_b` - Second strategy identifier
/// * `payoffs` - Payoff constants, validated before use
/// * `seed` - Seed for the `random` strategy's draws
///
/// # Returns
/// The two final records, in the same left/right order as the inputs.
pub fn initiate_match_with(
    rounds: i64,
    id_a: &str,
    id_b: &str,
    payoffs: &PayoffConfig,
    seed: u64,
) -> Result<(StrategyRecord, StrategyRecord), MatchError> {
    if rounds < 0 {
        return Err(MatchError::InvalidRoundCount(rounds));
    }
    let identity_a = StrategyId::from_id(id_a)
        .ok_or_else(|| MatchError::UnknownStrategy(id_a.to_string()))?;
    let identity_b = StrategyId::from_id(id_b)
        .ok_or_else(|| MatchError::UnknownStrategy(id_b.to_string()))?;
    payoffs.validate()?;

    let rng = SeededRng::new(seed);
    let mut a = StrategyRecord::new(identity_a);
    let mut b = StrategyRecord::new(identity_b);

    for round in 0..rounds as u64 {
        // Independent draw streams per side per round
        let mut rng_a = rng.fork(round * 2);
        let mut rng_b = rng.fork(round * 2 + 1);

        let (next_a, next_b) = play_round(a, b, payoffs, &mut rng_a, &mut rng_b);
        a = next_a;
        b = next_b;
    }

    log::info!(
        "match complete after {} rounds: {} scored {}, {} scored {}",
        rounds,
        a.identity(),
        a.total(),
        b.identity(),
        b.total(),
    );

    Ok((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Move;
    use proptest::prelude::*;

    const SEED: u64 = 42;

    #[test]
    fn test_zero_rounds_yields_empty_records() {
        let (a, b) = initiate_match(0, "sucker", "cheat", SEED).unwrap();

        assert_eq!(a.rounds_played(), 0);
        assert_eq!(b.rounds_played(), 0);
        assert_eq!(a.identity(), StrategyId::Sucker);
        assert_eq!(b.identity(), StrategyId::Cheat);
    }

    #[test]
    fn test_sucker_vs_sucker_one_round() {
        let (a, b) = initiate_match(1, "sucker", "sucker", SEED).unwrap();

        assert_eq!(a.points(), &[3]);
        assert_eq!(b.points(), &[3]);
    }

    #[test]
    fn test_cheat_vs_sucker_one_round() {
        let (cheat, sucker) = initiate_match(1, "cheat", "sucker", SEED).unwrap();

        assert_eq!(cheat.points(), &[5]);
        assert_eq!(sucker.points(), &[0]);
    }

    #[test]
    fn test_cheat_vs_cheat_one_round() {
        let (a, b) = initiate_match(1, "cheat", "cheat", SEED).unwrap();

        assert_eq!(a.points(), &[1]);
        assert_eq!(b.points(), &[1]);
    }

    #[test]
    fn test_cheat_vs_tit_for_tat_two_rounds() {
        let (cheat, tft) = initiate_match(2, "cheat", "tit-for-tat", SEED).unwrap();

        // Round 1: tit-for-tat cooperates and is punished.
        // Round 2: it retaliates and both defect.
        assert_eq!(tft.moves(), &[Move::Cooperate, Move::Defect]);
        assert_eq!(cheat.total(), 6);
        assert_eq!(tft.total(), 1);
    }

    #[test]
    fn test_cheat_vs_grudger_two_rounds() {
        let (cheat, grudger) = initiate_match(2, "cheat", "grudger", SEED).unwrap();

        // Grudger also cooperates exactly once before retaliating
        assert_eq!(grudger.moves(), &[Move::Cooperate, Move::Defect]);
        assert_eq!(cheat.total(), 6);
        assert_eq!(grudger.total(), 1);
    }

    #[test]
    fn test_grudger_vs_tit_for_tat_two_rounds() {
        let (grudger, tft) = initiate_match(2, "grudger", "tit-for-tat", SEED).unwrap();

        assert_eq!(grudger.total(), 6);
        assert_eq!(tft.total(), 6);
        assert_eq!(winner(&grudger, &tft), Verdict::Tie);
    }

    #[test]
    fn test_defector_alias_matches_cheat() {
        let (a1, b1) = initiate_match(5, "defector", "sucker", SEED).unwrap();
        let (a2, b2) = initiate_match(5, "cheat", "sucker", SEED).unwrap();

        assert_eq!(a1.points(), a2.points());
        assert_eq!(b1.points(), b2.points());
    }

    #[test]
    fn test_deterministic_replay() {
        for (a, b) in [
            ("sucker", "cheat"),
            ("tit-for-tat", "grudger"),
            ("pavlov", "cheat"),
        ] {
            let r1 = initiate_match(50, a, b, SEED).unwrap();
            let r2 = initiate_match(50, a, b, SEED).unwrap();
            assert_eq!(r1, r2, "{} vs {} should replay identically", a, b);
        }
    }

    #[test]
    fn test_random_replays_with_same_seed() {
        let r1 = initiate_match(50, "random", "tit-for-tat", 7).unwrap();
        let r2 = initiate_match(50, "random", "tit-for-tat", 7).unwrap();

        assert_eq!(r1, r2);
    }

    #[test]
    fn test_random_varies_across_seeds() {
        let (a1, _) = initiate_match(50, "random", "sucker", 1).unwrap();
        let (a2, _) = initiate_match(50, "random", "sucker", 2).unwrap();

        assert_ne!(a1.moves(), a2.moves());
    }

    #[test]
    fn test_random_sides_draw_independently() {
        // Two random players with one shared seed must not mirror
        // each other's coin flips.
        let (a, b) = initiate_match(100, "random", "random", SEED).unwrap();

        assert_ne!(a.moves(), b.moves());
    }

    #[test]
    fn test_pavlov_vs_cheat_cycles() {
        let (pavlov, _cheat) = initiate_match(4, "pavlov", "cheat", SEED).unwrap();

        // C (betrayed, shift), D (matched, stay... cooperate), C, D:
        // pavlov alternates against a constant defector.
        assert_eq!(
            pavlov.moves(),
            &[Move::Cooperate, Move::Defect, Move::Cooperate, Move::Defect]
        );
    }

    #[test]
    fn test_beliefs_match_opponent_moves() {
        let (a, b) = initiate_match(20, "pavlov", "tit-for-tat", SEED).unwrap();

        // With default payoffs the inference reconstructs the
        // opponent's actual play exactly
        assert_eq!(a.beliefs(), b.moves());
        assert_eq!(b.beliefs(), a.moves());
    }

    #[test]
    fn test_custom_payoffs_apply() {
        let payoffs = PayoffConfig {
            sucker: -1,
            defector: 0,
            partner: 2,
            backstabber: 3,
        };
        let (cheat, sucker) =
            initiate_match_with(1, "cheat", "sucker", &payoffs, SEED).unwrap();

        assert_eq!(cheat.points(), &[3]);
        assert_eq!(sucker.points(), &[-1]);
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let err = initiate_match(10, "mastermind", "sucker", SEED).unwrap_err();
        assert_eq!(err, MatchError::UnknownStrategy("mastermind".to_string()));

        let err = initiate_match(10, "sucker", "", SEED).unwrap_err();
        assert_eq!(err, MatchError::UnknownStrategy(String::new()));
    }

    #[test]
    fn test_negative_rounds_rejected() {
        let err = initiate_match(-1, "sucker", "cheat", SEED).unwrap_err();
        assert_eq!(err, MatchError::InvalidRoundCount(-1));
    }

    #[test]
    fn test_invalid_payoffs_rejected_before_play() {
        let payoffs = PayoffConfig {
            sucker: 5,
            defector: 1,
            partner: 3,
            backstabber: 0,
        };
        let err = initiate_match_with(10, "sucker", "cheat", &payoffs, SEED).unwrap_err();
        assert!(matches!(
            err,
            MatchError::InvalidPayoffConfiguration { .. }
        ));
    }

    #[test]
    fn test_winner_reports_higher_total() {
        let (cheat, sucker) = initiate_match(10, "cheat", "sucker", SEED).unwrap();

        assert_eq!(winner(&cheat, &sucker), Verdict::Winner(StrategyId::Cheat));
        assert_eq!(winner(&sucker, &cheat), Verdict::Winner(StrategyId::Cheat));
    }

    fn strategy_id() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec![
            "sucker",
            "cheat",
            "tit-for-tat",
            "grudger",
            "random",
            "pavlov",
        ])
    }

    proptest! {
        #[test]
        fn prop_histories_have_round_length(
            rounds in 0i64..60,
            a in strategy_id(),
            b in strategy_id(),
            seed in any::<u64>(),
        ) {
            let (ra, rb) = initiate_match(rounds, a, b, seed).unwrap();

            for r in [&ra, &rb] {
                prop_assert_eq!(r.points().len(), rounds as usize);
                prop_assert_eq!(r.moves().len(), rounds as usize);
                prop_assert_eq!(r.beliefs().len(), rounds as usize);
            }
        }

        #[test]
        fn prop_winner_is_antisymmetric(
            rounds in 0i64..60,
            a in strategy_id(),
            b in strategy_id(),
            seed in any::<u64>(),
        ) {
            let (ra, rb) = initiate_match(rounds, a, b, seed).unwrap();

            let forward = winner(&ra, &rb);
            let swapped = winner(&rb, &ra);
            prop_assert_eq!(forward, swapped);
        }

        #[test]
        fn prop_running_score_monotone_under_defaults(
            rounds in 0i64..60,
            a in strategy_id(),
            b in strategy_id(),
            seed in any::<u64>(),
        ) {
            let (ra, _) = initiate_match(rounds, a, b, seed).unwrap();

            let running = ra.running_score();
            prop_assert!(running.windows(2).all(|w| w[0] <= w[1]));
            prop_assert_eq!(running.last().copied().unwrap_or(0), ra.total());
        }
    }
}
