//! Core domain types for letter signatures
//!
//! This module contains the signature value type and the word index built from input.
//! Everything here is deterministic and total over any string input.

mod index;
mod signature;

pub use index::WordIndex;
pub use signature::{ALPHABET, ALPHABET_SIZE, LetterSignature, fold_case};
