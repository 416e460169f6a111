//! Fixed-width board words
//!
//! Every word on the board has exactly [`COLUMNS`] symbols. Dictionary words shorter
//! than that are right-padded with the blank symbol, so "cat" becomes `"CAT  "`.

use super::{COLUMNS, Symbol};
use std::cmp::Ordering;
use std::fmt;

/// A board-width word stored both as text and as symbols
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    symbols: [Symbol; COLUMNS],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must be 1 to {COLUMNS} symbols long, got {0}")]
    InvalidLength(usize),
    #[error("Word contains invalid character {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a dictionary word from 1 to 5 ASCII letters, padding with blanks
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is 0 or greater than 5
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use warmle::core::Word;
    ///
    /// let word = Word::new("cat").unwrap();
    /// assert_eq!(word.text(), "CAT  ");
    ///
    /// assert!(Word::new("toolong").is_err());
    /// assert!(Word::new("c t").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }
        Self::parse(text)
    }

    /// Parse a guess typed by a player: letters plus blanks (`' '` or `'_'`)
    ///
    /// Input shorter than the board is right-padded with blanks.
    ///
    /// # Errors
    /// Returns `WordError` if the input is empty, too long, or contains a
    /// symbol a player cannot type.
    pub fn parse(text: &str) -> Result<Self, WordError> {
        let len = text.chars().count();
        if len == 0 || len > COLUMNS {
            return Err(WordError::InvalidLength(len));
        }

        let mut symbols = [Symbol::BLANK; COLUMNS];
        for (slot, ch) in symbols.iter_mut().zip(text.chars()) {
            *slot = Symbol::from_char(ch)
                .filter(|s| s.is_guessable())
                .ok_or(WordError::InvalidCharacter(ch))?;
        }

        Ok(Self::from_symbols(symbols))
    }

    /// Build a word directly from board symbols
    #[must_use]
    pub fn from_symbols(symbols: [Symbol; COLUMNS]) -> Self {
        let text = symbols.iter().map(|s| s.to_char()).collect();
        Self { text, symbols }
    }

    /// The padded, uppercase text (always 5 characters)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text without trailing padding
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.text.trim_end()
    }

    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Symbol; COLUMNS] {
        &self.symbols
    }

    /// Get the symbol at a specific column (0-4)
    ///
    /// # Panics
    /// Panics if `column >= COLUMNS`
    #[inline]
    #[must_use]
    pub const fn symbol_at(&self, column: usize) -> Symbol {
        self.symbols[column]
    }
}

// Ordered by padded text, so "CAT  " sorts before "CATCH".
impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.symbol_at(0), Symbol::from_char('C').unwrap());
        assert_eq!(word.symbol_at(4), Symbol::from_char('E').unwrap());
    }

    #[test]
    fn short_words_are_padded_with_blank() {
        let word = Word::new("ox").unwrap();
        assert_eq!(word.text(), "OX   ");
        assert_eq!(word.trimmed(), "OX");
        assert_eq!(&word.symbols()[2..], &[Symbol::BLANK; 3]);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
        assert_eq!(Word::new("toolong"), Err(WordError::InvalidLength(7)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacter('3')));
        assert_eq!(Word::new("ca t"), Err(WordError::InvalidCharacter(' ')));
        assert!(Word::new("ca#t").is_err());
    }

    #[test]
    fn parse_accepts_blanks() {
        let guess = Word::parse("c_t").unwrap();
        assert_eq!(guess.text(), "C T  ");

        let guess = Word::parse("  a").unwrap();
        assert_eq!(guess.symbol_at(0), Symbol::BLANK);
        assert_eq!(guess.symbol_at(2), Symbol::from_char('A').unwrap());
    }

    #[test]
    fn parse_rejects_filler() {
        assert_eq!(Word::parse("ab#"), Err(WordError::InvalidCharacter('#')));
    }

    #[test]
    fn ordering_puts_padding_first() {
        let mut words = vec![
            Word::new("catch").unwrap(),
            Word::new("cat").unwrap(),
            Word::new("cats").unwrap(),
            Word::new("a").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["A    ", "CAT  ", "CATCH", "CATS "]);
    }

    #[test]
    fn word_equality_ignores_case() {
        assert_eq!(Word::new("Crane").unwrap(), Word::new("CRANE").unwrap());
        assert_ne!(Word::new("crane").unwrap(), Word::new("crone").unwrap());
    }

    #[test]
    fn from_symbols_matches_parse() {
        let parsed = Word::parse("ab").unwrap();
        let built = Word::from_symbols(*parsed.symbols());
        assert_eq!(parsed, built);
    }
}
