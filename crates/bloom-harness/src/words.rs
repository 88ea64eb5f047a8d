//! Word list loading and the absent-word sample
//!
//! Absent words are derived from the present list with a Caesar shift over
//! `a..=z`; any rotated word that happens to be in the list is dropped so the
//! two samples are disjoint.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::HarnessError;

/// Default Caesar shift used to derive absent words
pub const DEFAULT_ROTATION: u8 = 2;

/// Read a word list: one word per line, trimmed, blank lines skipped
pub fn load_words(path: &Path) -> Result<Vec<String>, HarnessError> {
    let content = fs::read_to_string(path).map_err(|source| HarnessError::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content);
    if words.is_empty() {
        return Err(HarnessError::EmptyWordList(path.to_path_buf()));
    }

    debug!(path = %path.display(), count = words.len(), "Loaded word list");
    Ok(words)
}

/// Split text into words, one per non-blank line
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Shift each lowercase ASCII letter by `offset` places, wrapping at `z`
///
/// Characters outside `a..=z` are left as they are.
pub fn rotate(word: &str, offset: u8) -> String {
    let shift = offset % 26;
    word.chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                (b'a' + (c as u8 - b'a' + shift) % 26) as char
            } else {
                c
            }
        })
        .collect()
}

/// Rotate every present word, keeping only results not in `present`
pub fn absent_words(present: &[String], offset: u8) -> Vec<String> {
    let known: HashSet<&str> = present.iter().map(String::as_str).collect();

    let absent: Vec<String> = present
        .iter()
        .map(|word| rotate(word, offset))
        .filter(|rotated| !known.contains(rotated.as_str()))
        .collect();

    debug!(
        present = present.len(),
        absent = absent.len(),
        dropped = present.len() - absent.len(),
        "Derived absent-word sample"
    );
    absent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_by_two() {
        assert_eq!(rotate("abc", 2), "cde");
        assert_eq!(rotate("xyz", 2), "zab");
    }

    #[test]
    fn test_rotate_keeps_other_characters() {
        assert_eq!(rotate("Don't-stop", 2), "Dqp'v-uvqr");
        assert_eq!(rotate("", 2), "");
    }

    #[test]
    fn test_rotate_full_cycle_is_identity() {
        assert_eq!(rotate("quantum", 26), "quantum");
        assert_eq!(rotate("quantum", 0), "quantum");
    }

    #[test]
    fn test_parse_words_trims_and_skips_blanks() {
        let words = parse_words("apple\n  banana  \n\n\r\ncherry\r\n");

        assert_eq!(words, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_absent_words_disjoint_from_present() {
        // "ace" rotates to "ceg", which is itself present.
        let present: Vec<String> = ["ace", "ceg", "dog"].iter().map(|s| s.to_string()).collect();

        let absent = absent_words(&present, 2);

        assert_eq!(absent, vec!["egi", "fqi"]);
        assert!(absent.iter().all(|w| !present.contains(w)));
    }
}
