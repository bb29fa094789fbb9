//! Thin CLI over the dilemma engine
//!
//! `dilemma <rounds> <strategy-a> <strategy-b>` runs one match and
//! prints the running scores and the verdict. The engine does all the
//! work; this binary only parses arguments and renders records.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use dilemma_engine::{initiate_match_with, winner, PayoffConfig, Verdict};

#[derive(Parser, Debug)]
#[command(
    name = "dilemma",
    about = "Play one Iterated Prisoner's Dilemma match between two strategies",
    after_help = "Strategies: sucker, cheat (alias: defector), tit-for-tat, grudger, random, pavlov"
)]
struct Args {
    /// Number of rounds to play
    rounds: i64,

    /// First strategy identifier
    strategy_a: String,

    /// Second strategy identifier
    strategy_b: String,

    /// Seed for the random strategy (defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final records as JSON instead of a score table
    #[arg(long)]
    json: bool,

    /// Override the payoff for cooperating against a defector
    #[arg(long)]
    sucker: Option<i64>,

    /// Override the payoff for mutual defection
    #[arg(long)]
    defector: Option<i64>,

    /// Override the payoff for mutual cooperation
    #[arg(long)]
    partner: Option<i64>,

    /// Override the payoff for defecting against a cooperator
    #[arg(long)]
    backstabber: Option<i64>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!("seed {}", seed);

    let payoffs = payoffs_from(args);
    let (a, b) = initiate_match_with(
        args.rounds,
        &args.strategy_a,
        &args.strategy_b,
        &payoffs,
        seed,
    )?;

    if args.json {
        let out = serde_json::json!({ "a": a, "b": b });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{:>5}  {:>12}  {:>12}", "round", a.identity(), b.identity());
    let score_a = a.running_score();
    let score_b = b.running_score();
    for (round, (sa, sb)) in score_a.iter().zip(score_b.iter()).enumerate() {
        println!("{:>5}  {:>12}  {:>12}", round + 1, sa, sb);
    }

    println!();
    println!("{}: {}", a.identity(), a.total());
    println!("{}: {}", b.identity(), b.total());
    match winner(&a, &b) {
        Verdict::Winner(id) => println!("{} wins", id),
        Verdict::Tie => println!("tie"),
    }

    Ok(())
}

/// Start from the default matrix, apply any overrides
///
/// The engine validates the result before playing.
fn payoffs_from(args: &Args) -> PayoffConfig {
    let mut payoffs = PayoffConfig::default();
    if let Some(v) = args.sucker {
        payoffs.sucker = v;
    }
    if let Some(v) = args.defector {
        payoffs.defector = v;
    }
    if let Some(v) = args.partner {
        payoffs.partner = v;
    }
    if let Some(v) = args.backstabber {
        payoffs.backstabber = v;
    }
    payoffs
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
