//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod pairs;

pub use analyze::{AnalysisResult, analyze_index};
pub use benchmark::{BenchmarkConfig, BenchmarkError, BenchmarkResult, run_benchmark};
pub use pairs::{PairsResult, WordPair, find_pairs, pairs_for_index};
