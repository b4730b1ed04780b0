//! Catalog analysis command
//!
//! Summarizes the signatures of a word list and how much work the pair search does on it.

use crate::core::{ALPHABET, LetterSignature, WordIndex};
use crate::solver::{PairMaximizer, SearchStrategy, total_pairs};
use std::collections::BTreeMap;

/// Result of analyzing a word list
pub struct AnalysisResult {
    pub strategy: &'static str,
    pub total_words: usize,
    pub distinct_words: usize,
    pub signatures: usize,
    /// Signature size -> number of distinct signatures of that size
    pub size_histogram: BTreeMap<u32, usize>,
    /// Largest signature and the words that have it
    pub widest: Option<(LetterSignature, Vec<String>)>,
    /// Letters of the alphabet that no word uses
    pub missing_letters: Vec<char>,
    pub best: u32,
    pub winning_pairs: usize,
    pub total_pairs: usize,
    /// Pairs the search reached, whether scored or cut off by the bound
    pub candidate_pairs: usize,
    pub unions_computed: usize,
    pub prunes: usize,
}

impl AnalysisResult {
    /// Fraction of pairs whose union was never computed
    #[must_use]
    pub fn pruned_fraction(&self) -> f64 {
        if self.total_pairs == 0 {
            return 0.0;
        }
        (self.total_pairs - self.unions_computed) as f64 / self.total_pairs as f64
    }
}

/// Analyze a word index with the given strategy
pub fn analyze_index<S: SearchStrategy>(
    index: &WordIndex,
    strategy: &S,
    strategy_name: &'static str,
) -> AnalysisResult {
    let mut size_histogram = BTreeMap::new();
    for signature in index.catalog() {
        *size_histogram.entry(signature.size()).or_insert(0) += 1;
    }

    // First signature of the largest size, in first-seen order
    let widest = index
        .catalog()
        .iter()
        .copied()
        .fold(None, |widest: Option<LetterSignature>, sig| match widest {
            Some(w) if w.size() >= sig.size() => Some(w),
            _ => Some(sig),
        })
        .map(|sig| {
            let words = index
                .group(sig)
                .map(|g| g.iter().cloned().collect())
                .unwrap_or_default();
            (sig, words)
        });

    let coverage = index
        .catalog()
        .iter()
        .fold(LetterSignature::EMPTY, |acc, &sig| acc | sig);
    let missing_letters = ALPHABET
        .into_iter()
        .filter(|&letter| !coverage.contains(letter))
        .collect();

    let answer = PairMaximizer::new(strategy, index).solve();

    AnalysisResult {
        strategy: strategy_name,
        total_words: index.word_count(),
        distinct_words: index.distinct_words(),
        signatures: index.len(),
        size_histogram,
        widest,
        missing_letters,
        best: answer.best,
        winning_pairs: answer.pairs.len(),
        total_pairs: total_pairs(index.len()),
        candidate_pairs: answer.stats.candidate_pairs,
        unions_computed: answer.stats.unions_computed,
        prunes: answer.stats.prunes,
    }
}
