//! Pair search
//!
//! This module finds the signature pairs with the largest letter union.

mod engine;
pub mod strategy;

pub use engine::{Answer, PairMaximizer, ResolvedPair, SearchStats};
pub use strategy::{ExhaustiveSearch, PrunedSearch, SearchStrategy, StrategyType, total_pairs};
