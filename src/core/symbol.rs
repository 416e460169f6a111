//! Board symbols and the alphabetical distance between them
//!
//! The symbol space is ordered by index:
//! - 0-25: the letters A-Z
//! - 26-31: filler symbols (never typed, never padded)
//! - 32: the blank symbol, used both as a guessable "space" and to pad short words
//!
//! All comparisons are made on the index, so the distance between the blank and `Z`
//! is 7, not the distance between their printable characters.

use std::fmt;

/// Number of letters A-Z
pub const LETTER_COUNT: usize = 26;

/// Number of filler symbols between the letters and the blank
pub const FILLER_COUNT: usize = 6;

/// Total number of symbols in the ordered symbol space
pub const SYMBOL_COUNT: usize = LETTER_COUNT + FILLER_COUNT + 1;

/// Printable marker for filler symbols
const FILLER_CHAR: char = '#';

/// One position of the ordered symbol space
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// The blank (space) symbol at the end of the symbol space
    pub const BLANK: Self = Self((SYMBOL_COUNT - 1) as u8);

    /// The first filler symbol
    pub const FILLER: Self = Self(LETTER_COUNT as u8);

    /// Create a symbol from its index
    ///
    /// Returns `None` if `index >= SYMBOL_COUNT`.
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < SYMBOL_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Parse a symbol from its printable character
    ///
    /// Letters are case-insensitive, `' '` and `'_'` map to the blank,
    /// `'#'` maps to the first filler.
    ///
    /// # Examples
    /// ```
    /// use warmle::core::Symbol;
    ///
    /// assert_eq!(Symbol::from_char('c'), Symbol::from_char('C'));
    /// assert_eq!(Symbol::from_char(' '), Some(Symbol::BLANK));
    /// assert_eq!(Symbol::from_char('3'), None);
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'A'..='Z' => Some(Self(ch as u8 - b'A')),
            'a'..='z' => Some(Self(ch as u8 - b'a')),
            ' ' | '_' => Some(Self::BLANK),
            FILLER_CHAR => Some(Self::FILLER),
            _ => None,
        }
    }

    /// Position of this symbol in the ordered symbol space (0-32)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Printable character for this symbol
    #[must_use]
    pub const fn to_char(self) -> char {
        if self.is_letter() {
            (b'A' + self.0) as char
        } else if self.is_blank() {
            ' '
        } else {
            FILLER_CHAR
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_letter(self) -> bool {
        (self.0 as usize) < LETTER_COUNT
    }

    #[inline]
    #[must_use]
    pub const fn is_filler(self) -> bool {
        !self.is_letter() && !self.is_blank()
    }

    #[inline]
    #[must_use]
    pub const fn is_blank(self) -> bool {
        self.0 == Self::BLANK.0
    }

    /// Whether a player may enter this symbol on the board (letters and the blank)
    #[inline]
    #[must_use]
    pub const fn is_guessable(self) -> bool {
        !self.is_filler()
    }

    /// Alphabetical distance between two symbols: `|index(a) - index(b)|`
    ///
    /// # Examples
    /// ```
    /// use warmle::core::Symbol;
    ///
    /// let a = Symbol::from_char('A').unwrap();
    /// let d = Symbol::from_char('D').unwrap();
    /// assert_eq!(a.distance(d), 3);
    /// assert_eq!(d.distance(a), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn distance(self, other: Self) -> usize {
        self.0.abs_diff(other.0) as usize
    }

    /// Every symbol in index order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SYMBOL_COUNT as u8).map(Self)
    }

    /// Symbols a player can enter: the 26 letters followed by the blank
    pub fn guessable() -> impl Iterator<Item = Self> {
        Self::all().filter(|symbol| symbol.is_guessable())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
