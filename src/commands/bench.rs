//! Benchmark command
//!
//! Plays every target word (or a random sample) to completion and reports
//! round statistics. Targets are independent, so the sweep runs in parallel.

use crate::core::Word;
use crate::solver::{DEFAULT_ROUND_BUDGET, Policy, Session, SessionState};
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run the benchmark over `dictionary`
///
/// With `sample` set, that many targets are drawn at random; otherwise every
/// dictionary word is played.
pub fn run_bench<P: Policy + Sync>(
    policy: &P,
    dictionary: &[Word],
    sample: Option<usize>,
) -> BenchResult {
    let targets: Vec<&Word> = match sample {
        Some(n) => dictionary.choose_multiple(&mut rand::rng(), n).collect(),
        None => dictionary.iter().collect(),
    };

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Vec<(usize, bool)> = targets
        .par_iter()
        .map(|target| {
            let mut session = Session::new(policy, dictionary);
            let state = session.run_auto(target);
            pb.inc(1);
            (session.rounds_played(), state == SessionState::Solved)
        })
        .collect();

    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_words = outcomes.len();
    let solved = outcomes.iter().filter(|(_, ok)| *ok).count();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;
    for &(rounds, ok) in &outcomes {
        if ok {
            *distribution.entry(rounds).or_insert(0) += 1;
            total_rounds += rounds;
            min_rounds = min_rounds.min(rounds);
            max_rounds = max_rounds.max(rounds);
        }
    }

    let average_rounds = if solved > 0 {
        total_rounds as f64 / solved as f64
    } else {
        0.0
    };

    BenchResult {
        total_words,
        solved,
        failed: total_words - solved,
        average_rounds,
        min_rounds: if solved > 0 { min_rounds } else { 0 },
        max_rounds,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
