//! The working dictionary

use super::{ALL_LISTS, loader};
use crate::core::Word;
use std::io;
use std::path::Path;

/// Immutable, sorted, deduplicated list of board-width words
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Merge word lists of any lengths into one padded, sorted dictionary
    ///
    /// Invalid entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use warmle::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_lists([&["crane", "apple"][..], &["cat"][..]]);
    /// let texts: Vec<&str> = dictionary.words().iter().map(|w| w.text()).collect();
    /// assert_eq!(texts, ["APPLE", "CAT  ", "CRANE"]);
    /// ```
    #[must_use]
    pub fn from_lists<'s, I>(lists: I) -> Self
    where
        I: IntoIterator<Item = &'s [&'s str]>,
    {
        let words = lists.into_iter().flat_map(loader::words_from_slice).collect();
        Self::from_words(words)
    }

    /// Sort and deduplicate already parsed words
    #[must_use]
    pub fn from_words(mut words: Vec<Word>) -> Self {
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// The dictionary built from the embedded 1- to 5-letter lists
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_lists(ALL_LISTS)
    }

    /// Load a dictionary file (one word of 1 to 5 letters per line)
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        loader::load_from_file(path).map(Self::from_words)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Binary search for a word
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }
}
