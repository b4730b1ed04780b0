//! Letter signature representation
//!
//! A signature records which letters of a fixed 29-letter alphabet occur in a word,
//! ignoring repetitions and order. It is stored as a single `u32` bitmask:
//! - bits 0-25: `a` through `z`
//! - bit 26: `ä`
//! - bit 27: `ö`
//! - bit 28: `å`

use std::fmt;
use std::ops::BitOr;

/// Number of letters a signature can hold
pub const ALPHABET_SIZE: u32 = 29;

/// Recognized letters in bit order
pub const ALPHABET: [char; ALPHABET_SIZE as usize] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'ä', 'ö', 'å',
];

const VALID_BITS: u32 = (1 << ALPHABET_SIZE) - 1;

/// Set of distinct letters appearing in a word
///
/// Ordering compares the raw masks. It exists so signatures can be sorted and
/// used as map keys; it says nothing about subset relationships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LetterSignature(u32);

impl LetterSignature {
    /// Signature with no letters
    pub const EMPTY: Self = Self(0);

    /// Signature containing every recognized letter
    pub const FULL: Self = Self(VALID_BITS);

    /// Build the signature of a word
    ///
    /// Matching is case-insensitive for `A`-`Z` and `Ä`, `Ö`, `Å`. Characters outside the
    /// alphabet are ignored, even if their Unicode lowercase form is a letter.
    ///
    /// # Examples
    /// ```
    /// use letter_pairs::core::LetterSignature;
    ///
    /// let sig = LetterSignature::from_word("Banana");
    /// assert_eq!(sig.size(), 3);
    /// assert_eq!(sig, LetterSignature::from_word("nab"));
    /// assert_eq!(LetterSignature::from_word("").size(), 0);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mask = word
            .chars()
            .map(fold_letter)
            .filter_map(letter_bit)
            .fold(0, |mask, bit| mask | (1 << bit));

        Self(mask)
    }

    /// Create a signature from a raw mask
    ///
    /// Bits above the alphabet are discarded.
    #[inline]
    #[must_use]
    pub const fn from_mask(mask: u32) -> Self {
        Self(mask & VALID_BITS)
    }

    /// Get the raw bitmask
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u32 {
        self.0
    }

    /// Number of distinct letters in the signature
    #[inline]
    #[must_use]
    pub const fn size(self) -> u32 {
        self.0.count_ones()
    }

    /// Letters present in either signature
    ///
    /// # Examples
    /// ```
    /// use letter_pairs::core::LetterSignature;
    ///
    /// let ab = LetterSignature::from_word("ab");
    /// let bc = LetterSignature::from_word("bc");
    /// assert_eq!(ab.union(bc), LetterSignature::from_word("abc"));
    /// ```
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether every letter of `self` also appears in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        self.0 & other.0 == self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if the signature contains a letter (case-insensitive)
    #[must_use]
    pub fn contains(self, letter: char) -> bool {
        letter_bit(fold_letter(letter)).is_some_and(|bit| self.0 & (1 << bit) != 0)
    }

    /// Iterate over the letters in bit order
    pub fn letters(self) -> impl Iterator<Item = char> {
        ALPHABET
            .into_iter()
            .enumerate()
            .filter(move |&(bit, _)| self.0 & (1 << bit) != 0)
            .map(|(_, letter)| letter)
    }
}

impl BitOr for LetterSignature {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl fmt::Display for LetterSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// Lowercase a word the way signatures see it
///
/// Only `A`-`Z` and `Ä`, `Ö`, `Å` change; every other character is kept as is.
///
/// # Examples
/// ```
/// use letter_pairs::core::fold_case;
///
/// assert_eq!(fold_case("ÅSKVÄDER"), "åskväder");
/// assert_eq!(fold_case("ÉCLAIR"), "Éclair");
/// ```
#[must_use]
pub fn fold_case(word: &str) -> String {
    word.chars().map(fold_letter).collect()
}

#[inline]
const fn fold_letter(letter: char) -> char {
    match letter {
        'Ä' => 'ä',
        'Ö' => 'ö',
        'Å' => 'å',
        _ => letter.to_ascii_lowercase(),
    }
}

/// Bit index of a lowercase letter, if it is part of the alphabet
#[inline]
fn letter_bit(letter: char) -> Option<u32> {
    match letter {
        'a'..='z' => Some(letter as u32 - 'a' as u32),
        'ä' => Some(26),
        'ö' => Some(27),
        'å' => Some(28),
        _ => None,
    }
}
