//! Word list parsing
//!
//! Lists hold one word of 1 to 5 ASCII letters per line, case-insensitive.
//! Lines starting with `#` and empty lines are ignored.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Parse the contents of a word list
///
/// Malformed lines are logged with their line number and skipped.
///
/// # Examples
/// ```
/// use warmle::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("# short words\ncat\n\nox\nnot-a-word\n");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["CAT  ", "OX   "]);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                return None;
            }
            match Word::new(entry) {
                Ok(word) => Some(word),
                Err(error) => {
                    warn!(line = number + 1, entry, %error, "skipping word list entry");
                    skipped += 1;
                    None
                }
            }
        })
        .collect();

    debug!(words = words.len(), skipped, "word list parsed");
    words
}

/// Read and parse a word list file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    fs::read_to_string(path).map(|content| parse_word_list(&content))
}

/// Convert an embedded list to padded words, dropping anything malformed
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
