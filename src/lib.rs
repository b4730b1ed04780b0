//! Letter Pairs
//!
//! Finds the pairs of words whose combined distinct letters cover the most of a
//! 29-letter alphabet (`a`-`z` plus `ä`, `ö`, `å`).
//!
//! # Quick Start
//!
//! ```rust
//! use letter_pairs::core::WordIndex;
//! use letter_pairs::solver::{PairMaximizer, PrunedSearch};
//!
//! let index = WordIndex::from_words(["xy", "yx", "ab"]);
//! let maximizer = PairMaximizer::new(PrunedSearch, &index);
//! let (answer, pairs) = maximizer.solve_resolved();
//!
//! assert_eq!(answer.best, 4);
//! assert_eq!(pairs[0].left.len(), 2); // "xy" and "yx"
//! ```

// Core domain types
pub mod core;

// Pair search algorithms
pub mod solver;

// Word lists and input
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
