//! Formatting utilities for terminal output

use crate::commands::WordPair;

/// Token placed between the two word groups of a pair
pub const PAIR_SEPARATOR: &str = "-";

/// Format a pair as a single answer line
///
/// Words within a group are joined by single spaces, with the separator between
/// the groups and no trailing whitespace.
///
/// # Examples
/// ```
/// use letter_pairs::commands::WordPair;
/// use letter_pairs::output::formatters::format_pair_line;
///
/// let pair = WordPair {
///     left: vec!["xy".into(), "yx".into()],
///     right: vec!["ab".into()],
/// };
/// assert_eq!(format_pair_line(&pair), "xy yx - ab");
/// ```
#[must_use]
pub fn format_pair_line(pair: &WordPair) -> String {
    format!(
        "{} {PAIR_SEPARATOR} {}",
        pair.left.join(" "),
        pair.right.join(" ")
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Shorten a word list for display, noting how many were left out
#[must_use]
pub fn preview_words(words: &[String], limit: usize) -> String {
    if words.len() <= limit {
        return words.join(" ");
    }
    format!(
        "{} (+{} more)",
        words[..limit].join(" "),
        words.len() - limit
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(left: &[&str], right: &[&str]) -> WordPair {
        WordPair {
            left: left.iter().map(|s| (*s).to_string()).collect(),
            right: right.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn pair_line_single_words() {
        assert_eq!(format_pair_line(&pair(&["abc"], &["def"])), "abc - def");
    }

    #[test]
    fn pair_line_groups() {
        assert_eq!(
            format_pair_line(&pair(&["listen", "silent"], &["ab", "ba"])),
            "listen silent - ab ba"
        );
    }

    #[test]
    fn pair_line_empty_word() {
        // An empty token still occupies its slot
        assert_eq!(format_pair_line(&pair(&[""], &["a"])), " - a");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn preview_short_and_long() {
        let words: Vec<String> = ["a", "b", "c"].iter().map(|s| (*s).to_string()).collect();
        assert_eq!(preview_words(&words, 5), "a b c");
        assert_eq!(preview_words(&words, 2), "a b (+1 more)");
    }
}
