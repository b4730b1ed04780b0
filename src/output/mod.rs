//! Terminal output formatting
//!
//! Answer lines for the pairs command and pretty-printed reports for the rest.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_benchmark_result, write_pairs};
