//! Pair search strategies
//!
//! Defines the `SearchStrategy` trait and its implementations.

use super::Answer;
use crate::core::LetterSignature;

/// A strategy for finding the signature pairs with the largest union
pub trait SearchStrategy {
    /// Search a catalog of distinct signatures
    ///
    /// The catalog should be sorted ascending by size, as `WordIndex::sorted_catalog`
    /// returns it. Pairs are then reported as `(catalog[i], catalog[j])` with `i > j`.
    /// Strategies that depend on the order sort a copy when given an unsorted catalog,
    /// so the best size and the set of winning pairs never depend on input order.
    /// A catalog with fewer than two entries yields an empty answer.
    fn search(&self, sorted: &[LetterSignature]) -> Answer;
}

impl<S: SearchStrategy + ?Sized> SearchStrategy for &S {
    fn search(&self, sorted: &[LetterSignature]) -> Answer {
        (**self).search(sorted)
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Size-pruned search (default)
    Pruned(PrunedSearch),
    /// Every pair, no pruning
    Exhaustive(ExhaustiveSearch),
}

impl SearchStrategy for StrategyType {
    fn search(&self, sorted: &[LetterSignature]) -> Answer {
        match self {
            Self::Pruned(s) => s.search(sorted),
            Self::Exhaustive(s) => s.search(sorted),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "pruned", "exhaustive", "brute-force"
    /// Defaults to pruned if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "exhaustive" | "brute-force" => Self::Exhaustive(ExhaustiveSearch),
            _ => Self::Pruned(PrunedSearch),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pruned(_) => "pruned",
            Self::Exhaustive(_) => "exhaustive",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Pruned(PrunedSearch)
    }
}

/// Search that skips pairs which cannot reach the current best
///
/// Walks `i` from the largest signature down and `j` from `i - 1` down. Since the
/// catalog is sorted by size, once `size(i) + size(j) < best` no smaller `j` can
/// reach `best` either, and the inner loop stops. The comparison is strict so that
/// pairs able to tie the best are still visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrunedSearch;

impl SearchStrategy for PrunedSearch {
    fn search(&self, sorted: &[LetterSignature]) -> Answer {
        // The size bound is only valid over a size-sorted catalog
        if !sorted.is_sorted_by_key(|sig| sig.size()) {
            let mut owned = sorted.to_vec();
            owned.sort_by_key(|sig| sig.size());
            return self.search(&owned);
        }

        let mut answer = Answer::default();

        for (i, &outer) in sorted.iter().enumerate().rev() {
            for &inner in sorted[..i].iter().rev() {
                answer.stats.candidate_pairs += 1;

                if outer.size() + inner.size() < answer.best {
                    answer.stats.prunes += 1;
                    break;
                }

                answer.offer(outer, inner);
            }
        }

        answer
    }
}

/// Reference search over every pair
///
/// Visits pairs in the same order as `PrunedSearch` without ever stopping early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExhaustiveSearch;

impl SearchStrategy for ExhaustiveSearch {
    fn search(&self, sorted: &[LetterSignature]) -> Answer {
        let mut answer = Answer::default();

        for (i, &outer) in sorted.iter().enumerate().rev() {
            for &inner in sorted[..i].iter().rev() {
                answer.stats.candidate_pairs += 1;
                answer.offer(outer, inner);
            }
        }

        answer
    }
}

impl Answer {
    /// Score one pair against the running best
    fn offer(&mut self, outer: LetterSignature, inner: LetterSignature) {
        let union_size = outer.union(inner).size();
        self.stats.unions_computed += 1;

        if union_size > self.best {
            self.best = union_size;
            self.pairs.clear();
            self.pairs.push((outer, inner));
        } else if union_size == self.best {
            self.pairs.push((outer, inner));
        }
    }
}

/// Number of unordered pairs of distinct catalog entries
#[must_use]
pub const fn total_pairs(catalog_len: usize) -> usize {
    catalog_len * catalog_len.saturating_sub(1) / 2
}
