//! Word index: signature catalog plus word groups
//!
//! Built once from the input words and read-only afterwards.

use super::{LetterSignature, fold_case};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use tracing::debug;

/// Distinct signatures of a word list and the words behind each one
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    catalog: Vec<LetterSignature>,
    groups: FxHashMap<LetterSignature, BTreeSet<String>>,
    word_count: usize,
}

impl WordIndex {
    /// Ingest a sequence of words
    ///
    /// Each word is case-folded (`A`-`Z`, `Ä`, `Ö`, `Å`) and filed under its signature. Signatures enter the
    /// catalog in first-seen order; repeated words collapse within their group.
    ///
    /// # Examples
    /// ```
    /// use letter_pairs::core::{LetterSignature, WordIndex};
    ///
    /// let index = WordIndex::from_words(["Listen", "silent", "tab"]);
    /// assert_eq!(index.len(), 2);
    ///
    /// let group = index.group(LetterSignature::from_word("listen")).unwrap();
    /// assert_eq!(group.iter().collect::<Vec<_>>(), ["listen", "silent"]);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Vec::new();
        let mut groups: FxHashMap<LetterSignature, BTreeSet<String>> = FxHashMap::default();
        let mut word_count = 0;

        for word in words {
            let word = fold_case(word.as_ref());
            let signature = LetterSignature::from_word(&word);
            word_count += 1;

            groups
                .entry(signature)
                .or_insert_with(|| {
                    catalog.push(signature);
                    BTreeSet::new()
                })
                .insert(word);
        }

        debug!(
            words = word_count,
            signatures = catalog.len(),
            "built word index"
        );

        Self {
            catalog,
            groups,
            word_count,
        }
    }

    /// Distinct signatures in first-seen order
    #[must_use]
    pub fn catalog(&self) -> &[LetterSignature] {
        &self.catalog
    }

    /// Distinct signatures sorted ascending by size
    ///
    /// Equal sizes appear in reverse first-seen order, so the search (which walks
    /// the catalog from the end) meets earlier words first.
    #[must_use]
    pub fn sorted_catalog(&self) -> Vec<LetterSignature> {
        let mut sorted: Vec<LetterSignature> = self.catalog.iter().rev().copied().collect();
        sorted.sort_by_key(|sig| sig.size());
        sorted
    }

    /// Words sharing a signature, in lexicographic order
    #[must_use]
    pub fn group(&self, signature: LetterSignature) -> Option<&BTreeSet<String>> {
        self.groups.get(&signature)
    }

    /// Number of words ingested, duplicates included
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of unique words after case folding
    #[must_use]
    pub fn distinct_words(&self) -> usize {
        self.groups.values().map(BTreeSet::len).sum()
    }

    /// Number of distinct signatures
    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}
