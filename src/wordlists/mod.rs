//! Word lists and input reading
//!
//! Provides the embedded sample list and loaders for whitespace-separated words.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE, SAMPLE_COUNT};
