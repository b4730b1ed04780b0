//! Main pair search interface

use super::strategy::SearchStrategy;
use crate::core::{LetterSignature, WordIndex};
use std::collections::BTreeSet;
use tracing::debug;

/// Counters collected during a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Pairs the search reached, including the one that triggered a prune
    pub candidate_pairs: usize,
    /// Union sizes actually computed
    pub unions_computed: usize,
    /// Inner loops cut short by the size bound
    pub prunes: usize,
}

/// Winning signature pairs and the union size they share
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answer {
    /// Largest union size found (0 when no pair exists)
    pub best: u32,
    /// Every pair reaching `best`, in discovery order
    pub pairs: Vec<(LetterSignature, LetterSignature)>,
    pub stats: SearchStats,
}

/// A winning pair resolved back to its words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPair<'a> {
    pub left: &'a BTreeSet<String>,
    pub right: &'a BTreeSet<String>,
}

/// Pair maximizer
///
/// Runs a search strategy over the catalog of a word index and maps the winning
/// signatures back to the words that produced them.
pub struct PairMaximizer<'a, S: SearchStrategy> {
    strategy: S,
    index: &'a WordIndex,
}

impl<'a, S: SearchStrategy> PairMaximizer<'a, S> {
    /// Create a new maximizer over an index
    pub const fn new(strategy: S, index: &'a WordIndex) -> Self {
        Self { strategy, index }
    }

    /// Find every signature pair with the largest union
    ///
    /// # Examples
    /// ```
    /// use letter_pairs::core::WordIndex;
    /// use letter_pairs::solver::{PairMaximizer, PrunedSearch};
    ///
    /// let index = WordIndex::from_words(["abc", "def"]);
    /// let answer = PairMaximizer::new(PrunedSearch, &index).solve();
    /// assert_eq!(answer.best, 6);
    /// assert_eq!(answer.pairs.len(), 1);
    /// ```
    pub fn solve(&self) -> Answer {
        let sorted = self.index.sorted_catalog();
        let answer = self.strategy.search(&sorted);

        debug!(
            signatures = sorted.len(),
            best = answer.best,
            pairs = answer.pairs.len(),
            unions = answer.stats.unions_computed,
            prunes = answer.stats.prunes,
            "pair search finished"
        );

        answer
    }

    /// Look up the word groups behind each winning pair
    ///
    /// Pairs whose signatures are not in the index are skipped.
    pub fn resolve(&self, answer: &Answer) -> Vec<ResolvedPair<'a>> {
        answer
            .pairs
            .iter()
            .filter_map(|&(left, right)| {
                Some(ResolvedPair {
                    left: self.index.group(left)?,
                    right: self.index.group(right)?,
                })
            })
            .collect()
    }

    /// Solve and resolve in one step
    pub fn solve_resolved(&self) -> (Answer, Vec<ResolvedPair<'a>>) {
        let answer = self.solve();
        let resolved = self.resolve(&answer);
        (answer, resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::{ExhaustiveSearch, PrunedSearch, StrategyType};

    fn words(group: &BTreeSet<String>) -> Vec<&str> {
        group.iter().map(String::as_str).collect()
    }

    #[test]
    fn solve_empty_index() {
        let index = WordIndex::from_words(Vec::<&str>::new());
        let (answer, resolved) = PairMaximizer::new(PrunedSearch, &index).solve_resolved();
        assert_eq!(answer.best, 0);
        assert!(resolved.is_empty());
    }

    #[test]
    fn solve_single_signature() {
        let index = WordIndex::from_words(["a", "a", "a"]);
        let (answer, resolved) = PairMaximizer::new(PrunedSearch, &index).solve_resolved();
        assert!(answer.pairs.is_empty());
        assert!(resolved.is_empty());
    }

    #[test]
    fn resolves_groups_with_several_words() {
        let index = WordIndex::from_words(["xy", "yx", "ab"]);
        let (answer, resolved) = PairMaximizer::new(PrunedSearch, &index).solve_resolved();

        assert_eq!(answer.best, 4);
        assert_eq!(resolved.len(), 1);
        assert_eq!(words(resolved[0].left), vec!["xy", "yx"]);
        assert_eq!(words(resolved[0].right), vec!["ab"]);
    }

    #[test]
    fn larger_signature_is_on_the_left() {
        let index = WordIndex::from_words(["ab", "cdef"]);
        let (_, resolved) = PairMaximizer::new(PrunedSearch, &index).solve_resolved();
        assert_eq!(words(resolved[0].left), vec!["cdef"]);
        assert_eq!(words(resolved[0].right), vec!["ab"]);
    }

    #[test]
    fn strategies_agree_through_the_engine() {
        let index = WordIndex::from_words([
            "quiz", "jumbo", "fjord", "vexing", "psalm", "thwack", "glyph", "äiti", "öljy",
            "åska", "nymph", "blitz", "crwth",
        ]);

        let pruned = PairMaximizer::new(StrategyType::default(), &index).solve();
        let exhaustive = PairMaximizer::new(ExhaustiveSearch, &index).solve();

        assert_eq!(pruned.best, exhaustive.best);
        assert_eq!(pruned.pairs, exhaustive.pairs);
    }

    #[test]
    fn resolve_skips_unknown_signatures() {
        let index = WordIndex::from_words(["ab", "cd"]);
        let maximizer = PairMaximizer::new(PrunedSearch, &index);
        let answer = Answer {
            best: 3,
            pairs: vec![(LetterSignature::from_word("xyz"), LetterSignature::from_word("ab"))],
            stats: SearchStats::default(),
        };
        assert!(maximizer.resolve(&answer).is_empty());
    }
}
