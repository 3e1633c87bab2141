//! Example demonstrating grid shuffling.
//!
//! This example shows how to:
//! - Create a `Shuffler` and draw a starting arrangement
//! - Replay an arrangement from a seed or a phrase
//! - Restrict shuffles to solvable arrangements
//! - Sample many seeds in parallel and keep the hardest-looking one
//!
//! # Usage
//!
//! ```sh
//! cargo run --example shuffle_grid
//! ```
//!
//! Replay a recorded seed (64 hexadecimal characters):
//!
//! ```sh
//! cargo run --example shuffle_grid -- --seed <SEED>
//! ```
//!
//! Derive the seed from a memorable phrase:
//!
//! ```sh
//! cargo run --example shuffle_grid -- --phrase "opening position"
//! ```
//!
//! Only produce arrangements that legal slides can solve:
//!
//! ```sh
//! cargo run --example shuffle_grid -- --solvable-only
//! ```
//!
//! Sample seeds and keep the arrangement with the largest starting
//! Manhattan distance:
//!
//! ```sh
//! cargo run --example shuffle_grid -- --solvable-only --sample 10000
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use taquin_advisor::{HintAdvisor, is_solvable, total_manhattan_distance};
use taquin_shuffler::{ShufflePolicy, ShuffleSeed, ShuffledGrid, Shuffler};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to replay, as 64 hexadecimal characters.
    #[arg(long, value_name = "SEED", conflicts_with_all = ["phrase", "sample"])]
    seed: Option<String>,

    /// Phrase to derive the seed from.
    #[arg(long, value_name = "PHRASE", conflicts_with = "sample")]
    phrase: Option<String>,

    /// Only produce arrangements that legal slides can solve.
    #[arg(long)]
    solvable_only: bool,

    /// Sample COUNT seeds and keep the largest starting distance.
    #[arg(long, value_name = "COUNT")]
    sample: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let policy = if args.solvable_only {
        ShufflePolicy::SolvableOnly
    } else {
        ShufflePolicy::AnyPermutation
    };
    let shuffler = Shuffler::with_policy(policy);

    let seed = match (&args.seed, &args.phrase) {
        (Some(hex), _) => match hex.parse() {
            Ok(seed) => Some(seed),
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        },
        (None, Some(phrase)) => Some(ShuffleSeed::from_phrase(phrase)),
        (None, None) => None,
    };

    let shuffled = if let Some(seed) = seed {
        shuffler.shuffle_with_seed(seed)
    } else if let Some(sample) = args.sample {
        if sample == 0 {
            eprintln!("--sample must be at least 1.");
            process::exit(1);
        }
        log::info!("sampling {sample} shuffles");
        let best = (0..sample)
            .into_par_iter()
            .map(|_| shuffler.shuffle())
            .max_by_key(|shuffled| total_manhattan_distance(&shuffled.grid))
            .expect("at least one sample");
        log::info!(
            "best distance: {}",
            total_manhattan_distance(&best.grid)
        );
        best
    } else {
        shuffler.shuffle()
    };

    print_shuffled(&shuffled);
}

fn print_shuffled(shuffled: &ShuffledGrid) {
    println!("Seed:");
    println!("  {}", shuffled.seed);
    println!();

    println!("Grid:");
    for line in shuffled.grid.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Analysis:");
    println!(
        "  Manhattan distance: {}",
        total_manhattan_distance(&shuffled.grid)
    );
    println!("  Solvable: {}", is_solvable(&shuffled.grid));
    match HintAdvisor::new().suggest(&shuffled.grid) {
        Some(hint) => println!(
            "  Suggested move: tile {} at cell {} (projected distance {})",
            hint.tile, hint.index, hint.projected_distance
        ),
        None => println!("  Suggested move: none available"),
    }
}
