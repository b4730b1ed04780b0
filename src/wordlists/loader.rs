//! Word list loading utilities
//!
//! Words are tokens separated by ASCII whitespace. Line breaks carry no meaning.
//! Bytes that are not valid UTF-8 are replaced with U+FFFD, which matches no letter.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read every whitespace-separated token until end of input
///
/// # Errors
///
/// Returns an I/O error if reading fails.
///
/// # Examples
/// ```
/// use letter_pairs::wordlists::loader::read_words;
///
/// let words = read_words("abc  def\n\n ghi\n".as_bytes()).unwrap();
/// assert_eq!(words, ["abc", "def", "ghi"]);
/// ```
pub fn read_words<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();

    for line in reader.split(b'\n') {
        let line = line?;
        words.extend(
            line.split(u8::is_ascii_whitespace)
                .filter(|token| !token.is_empty())
                .map(|token| String::from_utf8_lossy(token).into_owned()),
        );
    }

    Ok(words)
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use letter_pairs::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/sample.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    read_words(BufReader::new(File::open(path)?))
}

/// Load words from standard input
///
/// # Errors
///
/// Returns an I/O error if standard input cannot be read.
pub fn load_from_stdin() -> io::Result<Vec<String>> {
    read_words(io::stdin().lock())
}

/// Convert embedded string slice to owned words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn read_words_splits_on_any_whitespace() {
        let input = "one two\tthree\r\nfour\n\n   five   ";
        let words = read_words(input.as_bytes()).unwrap();
        assert_eq!(words, vec!["one", "two", "three", "four", "five"]);
    }

    #[test]
    fn read_words_keeps_case_and_punctuation() {
        let words = read_words("Hello, WORLD!".as_bytes()).unwrap();
        assert_eq!(words, vec!["Hello,", "WORLD!"]);
    }

    #[test]
    fn read_words_empty_input() {
        assert!(read_words("".as_bytes()).unwrap().is_empty());
        assert!(read_words(" \n\t\n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn read_words_multibyte_letters() {
        let words = read_words("åsk väder öl".as_bytes()).unwrap();
        assert_eq!(words, vec!["åsk", "väder", "öl"]);
    }

    #[test]
    fn read_words_keeps_tokens_with_invalid_utf8() {
        let bytes: &[u8] = b"abc def s\xe4\xe4\n";
        let words = read_words(bytes).unwrap();
        assert_eq!(words, vec!["abc", "def", "s\u{FFFD}\u{FFFD}"]);
    }

    #[test]
    fn latin1_token_does_not_hide_other_pairs() {
        use crate::commands::find_pairs;
        use crate::output::formatters::format_pair_line;
        use crate::solver::PrunedSearch;

        let words = read_words(&b"abc def s\xe4\xe4"[..]).unwrap();
        let result = find_pairs(&words, &PrunedSearch);
        let lines: Vec<String> = result.pairs.iter().map(format_pair_line).collect();
        assert_eq!(lines, vec!["abc - def"]);
    }

    #[test]
    fn read_words_only_splits_on_ascii_whitespace() {
        // U+00A0 stays inside the token
        let words = read_words("a\u{00A0}b c".as_bytes()).unwrap();
        assert_eq!(words, vec!["a\u{00A0}b", "c"]);
    }

    #[test]
    fn load_from_file_reads_tokens() {
        let path = std::env::temp_dir().join(format!("letter_pairs_loader_{}.txt", std::process::id()));
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "ab cd").unwrap();
            writeln!(file, "abcd").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(words, vec!["ab", "cd", "abcd"]);
    }

    #[test]
    fn load_from_missing_file() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }

    #[test]
    fn words_from_slice_converts() {
        let words = words_from_slice(&["a", "b"]);
        assert_eq!(words, vec!["a".to_string(), "b".to_string()]);
        assert!(words_from_slice(&[]).is_empty());
    }
}
