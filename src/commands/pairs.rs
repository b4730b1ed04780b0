//! Pairs command
//!
//! Finds the word groups whose combined letters cover the most of the alphabet.

use crate::core::WordIndex;
use crate::solver::{PairMaximizer, SearchStats, SearchStrategy};

/// One winning pair, as the words on each side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPair {
    pub left: Vec<String>,
    pub right: Vec<String>,
}

/// Result of a pairs run
#[derive(Debug, Clone)]
pub struct PairsResult {
    /// Size of the largest letter union (0 when no pair exists)
    pub best: u32,
    pub pairs: Vec<WordPair>,
    pub stats: SearchStats,
}

/// Find the best pairs for a list of words
///
/// # Examples
/// ```
/// use letter_pairs::commands::find_pairs;
/// use letter_pairs::solver::PrunedSearch;
///
/// let result = find_pairs(&["xy", "yx", "ab"], &PrunedSearch);
/// assert_eq!(result.best, 4);
/// assert_eq!(result.pairs[0].left, ["xy", "yx"]);
/// assert_eq!(result.pairs[0].right, ["ab"]);
/// ```
pub fn find_pairs<W, S>(words: &[W], strategy: &S) -> PairsResult
where
    W: AsRef<str>,
    S: SearchStrategy,
{
    let index = WordIndex::from_words(words);
    pairs_for_index(&index, strategy)
}

/// Find the best pairs for an already built index
pub fn pairs_for_index<S: SearchStrategy>(index: &WordIndex, strategy: &S) -> PairsResult {
    let maximizer = PairMaximizer::new(strategy, index);
    let (answer, resolved) = maximizer.solve_resolved();

    let pairs = resolved
        .into_iter()
        .map(|pair| WordPair {
            left: pair.left.iter().cloned().collect(),
            right: pair.right.iter().cloned().collect(),
        })
        .collect();

    PairsResult {
        best: answer.best,
        pairs,
        stats: answer.stats,
    }
}
