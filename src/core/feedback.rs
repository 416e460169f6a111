//! Distance-based scoring of guessed symbols
//!
//! A guessed symbol is compared to the target symbol of the same column:
//! - Correct: same symbol
//! - Close: different, but at most `offset` index-steps away
//! - Far: further away than `offset`
//!
//! Unlike Wordle, a column is scored only against its own target symbol, so there is
//! no "present elsewhere" state and duplicate letters need no special handling.

use super::{COLUMNS, Symbol};
use std::fmt;

/// Score of a single board cell
///
/// These are independent categories, not a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Classification {
    /// The cell has not been scored yet
    #[default]
    Unset,
    /// Further than the tolerance from the target
    Far,
    /// Within the tolerance of the target, but not equal to it
    Close,
    /// Equal to the target
    Correct,
}

impl Classification {
    /// Emoji used for this classification in board summaries
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Close => '🟨',
            Self::Far => '⬜',
            Self::Unset => '▫',
        }
    }
}

/// Scoring tolerance: how many index-steps away a guess may be to count as Close
///
/// Offsets are non-negative by construction; use [`Offset::try_from`] to validate
/// an untrusted signed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Offset(u8);

/// Returned when a negative (or absurdly large) offset is supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("offset must be between 0 and {max}, got {value}", max = u8::MAX)]
pub struct InvalidOffset {
    pub value: i64,
}

impl Offset {
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<i64> for Offset {
    type Error = InvalidOffset;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Self)
            .map_err(|_| InvalidOffset { value })
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classify one guessed symbol against the target symbol of its column
///
/// # Examples
/// ```
/// use warmle::core::{Classification, Offset, Symbol, classify};
///
/// let a = Symbol::from_char('A').unwrap();
/// let c = Symbol::from_char('C').unwrap();
/// let d = Symbol::from_char('D').unwrap();
///
/// assert_eq!(classify(a, a, Offset::new(1)), Classification::Correct);
/// assert_eq!(classify(a, c, Offset::new(2)), Classification::Close);
/// assert_eq!(classify(a, d, Offset::new(2)), Classification::Far);
/// ```
#[inline]
#[must_use]
pub const fn classify(target: Symbol, guess: Symbol, offset: Offset) -> Classification {
    if target.index() == guess.index() {
        Classification::Correct
    } else if target.distance(guess) <= offset.value() {
        Classification::Close
    } else {
        Classification::Far
    }
}

/// Classifications of one full board row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback([Classification; COLUMNS]);

impl Feedback {
    /// Every column Correct
    pub const SOLVED: Self = Self([Classification::Correct; COLUMNS]);

    #[must_use]
    pub const fn new(classifications: [Classification; COLUMNS]) -> Self {
        Self(classifications)
    }

    /// Score a whole guessed row against the target row
    #[must_use]
    pub fn calculate(target: &[Symbol; COLUMNS], guess: &[Symbol; COLUMNS], offset: Offset) -> Self {
        let mut result = [Classification::Unset; COLUMNS];
        for (slot, (&t, &g)) in result.iter_mut().zip(target.iter().zip(guess)) {
            *slot = classify(t, g, offset);
        }
        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn classifications(&self) -> &[Classification; COLUMNS] {
        &self.0
    }

    /// Classification of a single column (0-4)
    ///
    /// # Panics
    /// Panics if `column >= COLUMNS`
    #[inline]
    #[must_use]
    pub const fn get(&self, column: usize) -> Classification {
        self.0[column]
    }

    /// Check if every column is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&c| c == Classification::Correct)
    }

    /// Check if every column has been scored
    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.0.iter().all(|&c| c != Classification::Unset)
    }

    #[must_use]
    pub fn count(&self, classification: Classification) -> usize {
        self.0.iter().filter(|&&c| c == classification).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn sym(ch: char) -> Symbol {
        Symbol::from_char(ch).unwrap()
    }

    #[test]
    fn same_symbol_is_always_correct() {
        for offset in [0, 1, 2, 3, 10] {
            for s in Symbol::all() {
                assert_eq!(classify(s, s, Offset::new(offset)), Classification::Correct);
            }
        }
    }

    #[test]
    fn close_boundary_is_inclusive() {
        for offset in 0..5u8 {
            for target in Symbol::all() {
                for guess in Symbol::all() {
                    let d = target.distance(guess);
                    let result = classify(target, guess, Offset::new(offset));
                    if d == 0 {
                        assert_eq!(result, Classification::Correct);
                    } else if d == usize::from(offset) {
                        assert_eq!(result, Classification::Close);
                    } else if d == usize::from(offset) + 1 {
                        assert_eq!(result, Classification::Far);
                    }
                }
            }
        }
    }

    #[test]
    fn zero_offset_never_yields_close() {
        let zero = Offset::new(0);
        assert_eq!(classify(sym('A'), sym('B'), zero), Classification::Far);
        assert_eq!(classify(sym('B'), sym('B'), zero), Classification::Correct);
    }

    #[test]
    fn classify_is_deterministic() {
        let offset = Offset::new(2);
        let first = classify(sym('M'), sym('K'), offset);
        for _ in 0..10 {
            assert_eq!(classify(sym('M'), sym('K'), offset), first);
        }
    }

    #[test]
    fn blank_scores_against_letters_by_index() {
        // Blank is 7 steps past Z
        assert_eq!(classify(Symbol::BLANK, sym('Z'), Offset::new(3)), Classification::Far);
        assert_eq!(classify(Symbol::BLANK, sym('Z'), Offset::new(7)), Classification::Close);
    }

    #[test]
    fn offset_rejects_negative_values() {
        assert_eq!(Offset::try_from(3), Ok(Offset::new(3)));
        assert_eq!(Offset::try_from(0), Ok(Offset::new(0)));
        assert_eq!(Offset::try_from(-1), Err(InvalidOffset { value: -1 }));
        assert!(Offset::try_from(1000).is_err());
    }

    #[test]
    fn crane_against_crone() {
        let target = Word::new("crane").unwrap();
        let guess = Word::new("crone").unwrap();
        let feedback = Feedback::calculate(target.symbols(), guess.symbols(), Offset::new(3));

        assert_eq!(
            feedback.classifications(),
            &[
                Classification::Correct,
                Classification::Correct,
                Classification::Far,
                Classification::Correct,
                Classification::Correct,
            ]
        );
        assert!(!feedback.is_solved());
        assert_eq!(feedback.count(Classification::Correct), 4);
        assert_eq!(feedback.to_emoji(), "🟩🟩⬜🟩🟩");
    }

    #[test]
    fn identical_rows_are_solved() {
        let word = Word::new("apple").unwrap();
        let feedback = Feedback::calculate(word.symbols(), word.symbols(), Offset::new(1));
        assert_eq!(feedback, Feedback::SOLVED);
        assert!(feedback.is_solved());
        assert!(feedback.is_scored());
    }

    #[test]
    fn default_feedback_is_unscored() {
        let feedback = Feedback::default();
        assert!(!feedback.is_scored());
        assert_eq!(feedback.count(Classification::Unset), COLUMNS);
    }
}
