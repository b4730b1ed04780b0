//! Benchmark command
//!
//! Times pruned and exhaustive search on randomly generated word lists.

use crate::core::{ALPHABET, LetterSignature, WordIndex};
use crate::solver::{Answer, ExhaustiveSearch, PrunedSearch, SearchStrategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Benchmark parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Words generated per round
    pub words: usize,
    /// Maximum generated word length
    pub max_len: usize,
    pub rounds: usize,
    /// Seed of the first round; round `n` uses `seed + n`
    pub seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            words: 2_000,
            max_len: 12,
            rounds: 5,
            seed: 42,
        }
    }
}

/// Error type for invalid benchmark parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchmarkError {
    NoWords,
    ZeroLength,
    NoRounds,
}

impl fmt::Display for BenchmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWords => write!(f, "Benchmark needs at least one word per round"),
            Self::ZeroLength => write!(f, "Maximum word length must be at least 1"),
            Self::NoRounds => write!(f, "Benchmark needs at least one round"),
        }
    }
}

impl std::error::Error for BenchmarkError {}

impl BenchmarkConfig {
    /// Check the parameters
    ///
    /// # Errors
    /// Returns `BenchmarkError` if any count is zero.
    pub const fn validate(&self) -> Result<(), BenchmarkError> {
        if self.words == 0 {
            return Err(BenchmarkError::NoWords);
        }
        if self.max_len == 0 {
            return Err(BenchmarkError::ZeroLength);
        }
        if self.rounds == 0 {
            return Err(BenchmarkError::NoRounds);
        }
        Ok(())
    }
}

/// Totals for one strategy across all rounds
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategyTiming {
    pub duration: Duration,
    pub candidate_pairs: usize,
    pub unions_computed: usize,
    pub prunes: usize,
}

impl StrategyTiming {
    fn record(&mut self, answer: &Answer, elapsed: Duration) {
        self.duration += elapsed;
        self.candidate_pairs += answer.stats.candidate_pairs;
        self.unions_computed += answer.stats.unions_computed;
        self.prunes += answer.stats.prunes;
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub config: BenchmarkConfig,
    /// Average distinct signatures per round
    pub average_signatures: f64,
    pub pruned: StrategyTiming,
    pub exhaustive: StrategyTiming,
    /// Rounds where the strategies disagreed
    pub mismatches: usize,
    /// Best union size seen in each round
    pub best_per_round: Vec<u32>,
}

impl BenchmarkResult {
    /// Exhaustive time divided by pruned time
    #[must_use]
    pub fn speedup(&self) -> f64 {
        let pruned = self.pruned.duration.as_secs_f64();
        if pruned > 0.0 {
            self.exhaustive.duration.as_secs_f64() / pruned
        } else {
            0.0
        }
    }

    /// Share of exhaustive union computations the pruned search avoided
    #[must_use]
    pub fn pruning_ratio(&self) -> f64 {
        if self.exhaustive.unions_computed == 0 {
            return 0.0;
        }
        1.0 - self.pruned.unions_computed as f64 / self.exhaustive.unions_computed as f64
    }
}

/// Generate random words over the full alphabet
///
/// Lengths are uniform in `1..=max_len`.
pub fn generate_words<R: Rng>(rng: &mut R, count: usize, max_len: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let len = rng.random_range(1..=max_len.max(1));
            (0..len)
                .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
                .collect()
        })
        .collect()
}

/// Run both strategies over freshly generated word lists
///
/// # Errors
/// Returns `BenchmarkError` if the configuration is invalid.
pub fn run_benchmark(config: BenchmarkConfig) -> Result<BenchmarkResult, BenchmarkError> {
    config.validate()?;

    info!(
        words = config.words,
        max_len = config.max_len,
        rounds = config.rounds,
        seed = config.seed,
        "starting benchmark"
    );

    let pb = ProgressBar::new(config.rounds as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} rounds | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut pruned = StrategyTiming::default();
    let mut exhaustive = StrategyTiming::default();
    let mut mismatches = 0;
    let mut total_signatures = 0;
    let mut best_per_round = Vec::with_capacity(config.rounds);

    for round in 0..config.rounds {
        let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(round as u64));
        let words = generate_words(&mut rng, config.words, config.max_len);
        let index = WordIndex::from_words(&words);
        let sorted = index.sorted_catalog();
        total_signatures += sorted.len();

        let (pruned_answer, elapsed) = timed(&PrunedSearch, &sorted);
        pruned.record(&pruned_answer, elapsed);

        let (exhaustive_answer, elapsed) = timed(&ExhaustiveSearch, &sorted);
        exhaustive.record(&exhaustive_answer, elapsed);

        if !same_answer(&pruned_answer, &exhaustive_answer) {
            warn!(round, "pruned and exhaustive search disagree");
            mismatches += 1;
        }

        best_per_round.push(pruned_answer.best);
        pb.set_message(format!("best {}", pruned_answer.best));
        pb.inc(1);
    }

    pb.finish_and_clear();

    Ok(BenchmarkResult {
        config,
        average_signatures: total_signatures as f64 / config.rounds as f64,
        pruned,
        exhaustive,
        mismatches,
        best_per_round,
    })
}

fn timed<S: SearchStrategy>(strategy: &S, sorted: &[LetterSignature]) -> (Answer, Duration) {
    let start = Instant::now();
    let answer = strategy.search(sorted);
    (answer, start.elapsed())
}

/// Compare best size and winning pairs, ignoring order
fn same_answer(a: &Answer, b: &Answer) -> bool {
    let unordered = |answer: &Answer| -> BTreeSet<(LetterSignature, LetterSignature)> {
        answer
            .pairs
            .iter()
            .map(|&(x, y)| (x.max(y), x.min(y)))
            .collect()
    };

    a.best == b.best && unordered(a) == unordered(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> BenchmarkConfig {
        BenchmarkConfig {
            words: 150,
            max_len: 8,
            rounds: 3,
            seed: 7,
        }
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(small_config()).unwrap();

        assert_eq!(result.mismatches, 0);
        assert_eq!(result.best_per_round.len(), 3);
        assert!(result.average_signatures > 0.0);
        assert!(result.pruned.unions_computed <= result.exhaustive.unions_computed);
        assert!(result.pruning_ratio() >= 0.0);
    }

    #[test]
    fn candidate_pairs_are_totalled_per_strategy() {
        let result = run_benchmark(small_config()).unwrap();

        assert_eq!(result.exhaustive.candidate_pairs, result.exhaustive.unions_computed);
        assert_eq!(
            result.pruned.candidate_pairs,
            result.pruned.unions_computed + result.pruned.prunes
        );
        assert!(result.pruned.candidate_pairs <= result.exhaustive.candidate_pairs);
    }

    #[test]
    fn benchmark_is_reproducible() {
        let first = run_benchmark(small_config()).unwrap();
        let second = run_benchmark(small_config()).unwrap();
        assert_eq!(first.best_per_round, second.best_per_round);
        assert_eq!(first.pruned.unions_computed, second.pruned.unions_computed);
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let base = small_config();

        let config = BenchmarkConfig { words: 0, ..base };
        assert_eq!(run_benchmark(config).unwrap_err(), BenchmarkError::NoWords);

        let config = BenchmarkConfig { max_len: 0, ..base };
        assert_eq!(config.validate(), Err(BenchmarkError::ZeroLength));

        let config = BenchmarkConfig { rounds: 0, ..base };
        assert_eq!(config.validate(), Err(BenchmarkError::NoRounds));

        assert!(BenchmarkConfig::default().validate().is_ok());
    }

    #[test]
    fn generated_words_respect_length() {
        let mut rng = StdRng::seed_from_u64(1);
        let words = generate_words(&mut rng, 500, 5);

        assert_eq!(words.len(), 500);
        for word in &words {
            let len = word.chars().count();
            assert!((1..=5).contains(&len), "bad length for '{word}'");
            assert!(word.chars().all(|c| ALPHABET.contains(&c)));
        }
    }

    #[test]
    fn same_answer_ignores_pair_order() {
        let a = LetterSignature::from_word("ab");
        let b = LetterSignature::from_word("cd");
        let first = Answer {
            best: 4,
            pairs: vec![(a, b)],
            ..Answer::default()
        };
        let second = Answer {
            best: 4,
            pairs: vec![(b, a)],
            ..Answer::default()
        };
        assert!(same_answer(&first, &second));

        let third = Answer { best: 3, ..second };
        assert!(!same_answer(&first, &third));
    }
}
