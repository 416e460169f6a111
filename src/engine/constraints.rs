//! Per-column possibility tracking
//!
//! Each board column keeps the set of symbols that are still consistent with every
//! scored guess in that column. Given a guessed symbol `g` and the band of symbols
//! within `offset` steps of it:
//! - Far removes the whole band (the target is not near `g`)
//! - Close keeps only the band, minus `g` itself
//! - Correct pins the column to `{g}`
//!
//! Column sets are always rebuilt from the full symbol space by folding over the whole
//! row history in order. A Far seen late must still strip its band from the full
//! alphabet, and a Correct at any row pins the column regardless of what came before.

use crate::core::{COLUMNS, Classification, Feedback, Offset, SYMBOL_COUNT, Symbol};
use std::fmt;

/// Set of symbols, one bit per symbol index
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PossibilitySet(u64);

/// Error raised while folding classifications into a possibility set
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintError {
    #[error("cannot apply an unscored cell in column {column}")]
    UnknownClassification { column: usize },
}

const FULL_MASK: u64 = (1u64 << SYMBOL_COUNT) - 1;

impl PossibilitySet {
    /// Every symbol of the symbol space
    pub const FULL: Self = Self(FULL_MASK);

    pub const EMPTY: Self = Self(0);

    #[must_use]
    pub const fn singleton(symbol: Symbol) -> Self {
        Self(1u64 << symbol.index())
    }

    /// All symbols within `offset` steps of `center`, clamped to the symbol space
    ///
    /// # Examples
    /// ```
    /// use warmle::core::{Offset, Symbol};
    /// use warmle::engine::PossibilitySet;
    ///
    /// let d = Symbol::from_char('D').unwrap();
    /// let band = PossibilitySet::band(d, Offset::new(1));
    /// assert_eq!(band.to_string(), "CDE");
    /// ```
    #[must_use]
    pub fn band(center: Symbol, offset: Offset) -> Self {
        let start = center.index().saturating_sub(offset.value());
        let stop = (center.index() + offset.value()).min(SYMBOL_COUNT - 1);
        (start..=stop)
            .filter_map(Symbol::from_index)
            .collect()
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, symbol: Symbol) -> bool {
        self.0 & (1u64 << symbol.index()) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The pinned symbol, if exactly one remains
    #[must_use]
    pub fn single(self) -> Option<Symbol> {
        if self.len() == 1 {
            Symbol::from_index(self.0.trailing_zeros() as usize)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[must_use]
    pub const fn without(self, symbol: Symbol) -> Self {
        self.difference(Self::singleton(symbol))
    }

    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Symbols in index order
    pub fn iter(self) -> impl Iterator<Item = Symbol> {
        Symbol::all().filter(move |&s| self.contains(s))
    }

    /// Fold one scored guess into this set
    ///
    /// `column` is only used to label the error.
    ///
    /// # Errors
    /// Returns `ConstraintError::UnknownClassification` for an `Unset` classification:
    /// an unscored cell carries no evidence and must never widen or shrink a column.
    pub fn update(
        self,
        column: usize,
        guess: Symbol,
        classification: Classification,
        offset: Offset,
    ) -> Result<Self, ConstraintError> {
        let band = Self::band(guess, offset);
        match classification {
            Classification::Far => Ok(self.difference(band)),
            Classification::Close => Ok(self.intersection(band).without(guess)),
            Classification::Correct => Ok(Self::singleton(guess)),
            Classification::Unset => Err(ConstraintError::UnknownClassification { column }),
        }
    }
}

impl Default for PossibilitySet {
    fn default() -> Self {
        Self::FULL
    }
}

impl FromIterator<Symbol> for PossibilitySet {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self(iter.into_iter().fold(0u64, |bits, s| bits | (1u64 << s.index())))
    }
}

impl fmt::Display for PossibilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.iter() {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PossibilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Symbol::index)).finish()
    }
}

/// Rebuild every column's possibility set from the scored rows, in row order
///
/// # Errors
/// Returns `ConstraintError` if any row still contains an unscored cell.
///
/// # Examples
/// ```
/// use warmle::core::{Feedback, Offset, Word};
/// use warmle::engine::recompute;
///
/// let secret = Word::new("crane").unwrap();
/// let guess = Word::new("crane").unwrap();
/// let feedback = Feedback::calculate(secret.symbols(), guess.symbols(), Offset::new(3));
///
/// let columns = recompute([(*guess.symbols(), feedback)], Offset::new(3)).unwrap();
/// assert!(columns.iter().all(|set| set.len() == 1));
/// ```
pub fn recompute<I>(rows: I, offset: Offset) -> Result<[PossibilitySet; COLUMNS], ConstraintError>
where
    I: IntoIterator<Item = ([Symbol; COLUMNS], Feedback)>,
{
    let mut columns = [PossibilitySet::FULL; COLUMNS];
    for (guess, feedback) in rows {
        for (column, set) in columns.iter_mut().enumerate() {
            *set = set.update(column, guess[column], feedback.get(column), offset)?;
        }
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(ch: char) -> Symbol {
        Symbol::from_char(ch).unwrap()
    }

    #[test]
    fn full_set_has_every_symbol() {
        assert_eq!(PossibilitySet::FULL.len(), SYMBOL_COUNT);
        assert!(Symbol::all().all(|s| PossibilitySet::FULL.contains(s)));
        assert_eq!(PossibilitySet::default(), PossibilitySet::FULL);
        assert!(PossibilitySet::EMPTY.is_empty());
    }

    #[test]
    fn band_is_clamped_at_both_ends() {
        let low = PossibilitySet::band(sym('A'), Offset::new(3));
        assert_eq!(low.iter().map(Symbol::index).collect::<Vec<_>>(), [0, 1, 2, 3]);

        let high = PossibilitySet::band(Symbol::BLANK, Offset::new(2));
        assert_eq!(high.iter().map(Symbol::index).collect::<Vec<_>>(), [30, 31, 32]);

        let zero = PossibilitySet::band(sym('M'), Offset::new(0));
        assert_eq!(zero, PossibilitySet::singleton(sym('M')));
    }

    #[test]
    fn far_removes_the_whole_band() {
        // Target A, guess D, offset 1: Far, so C, D and E are all ruled out
        let set = PossibilitySet::FULL
            .update(0, sym('D'), Classification::Far, Offset::new(1))
            .unwrap();

        assert_eq!(set.len(), SYMBOL_COUNT - 3);
        for removed in [2, 3, 4] {
            assert!(!set.contains(Symbol::from_index(removed).unwrap()));
        }
        assert!(set.contains(sym('A')));
        assert!(set.contains(sym('B')));
        assert!(set.contains(sym('F')));
    }

    #[test]
    fn close_keeps_band_minus_guess() {
        let set = PossibilitySet::FULL
            .update(0, sym('M'), Classification::Close, Offset::new(2))
            .unwrap();
        assert_eq!(set.to_string(), "KLNO");
    }

    #[test]
    fn correct_pins_the_column() {
        let shrunk = PossibilitySet::band(sym('B'), Offset::new(1));
        let set = shrunk
            .update(0, sym('X'), Classification::Correct, Offset::new(3))
            .unwrap();
        assert_eq!(set.single(), Some(sym('X')));
    }

    #[test]
    fn unset_is_rejected() {
        let result = PossibilitySet::FULL.update(3, sym('A'), Classification::Unset, Offset::new(1));
        assert_eq!(result, Err(ConstraintError::UnknownClassification { column: 3 }));
    }

    #[test]
    fn pinned_column_never_grows() {
        let pinned = PossibilitySet::singleton(sym('Q'));
        for guess in Symbol::all() {
            for classification in [Classification::Far, Classification::Close, Classification::Correct] {
                let next = pinned.update(0, guess, classification, Offset::new(3)).unwrap();
                assert!(next.len() <= 1, "{guess:?} {classification:?} grew the set");
            }
        }
    }

    #[test]
    fn later_correct_overrides_earlier_evidence() {
        let offset = Offset::new(1);
        let far = [Classification::Far; COLUMNS];
        let solved = [Classification::Correct; COLUMNS];
        let guess = [sym('K'); COLUMNS];

        let rows = [(guess, Feedback::new(far)), (guess, Feedback::new(solved))];
        let columns = recompute(rows, offset).unwrap();

        // Contradictory, but the fold still ends pinned on the last Correct
        assert!(columns.iter().all(|set| set.single() == Some(sym('K'))));
    }

    #[test]
    fn recompute_with_no_rows_is_full() {
        let rows: [([Symbol; COLUMNS], Feedback); 0] = [];
        let columns = recompute(rows, Offset::new(2)).unwrap();
        assert_eq!(columns, [PossibilitySet::FULL; COLUMNS]);
    }

    #[test]
    fn recompute_rejects_unscored_rows() {
        let guess = [sym('A'); COLUMNS];
        let unscored = Feedback::default();
        let result = recompute([(guess, unscored)], Offset::new(2));
        assert_eq!(result, Err(ConstraintError::UnknownClassification { column: 0 }));
    }

    #[test]
    fn recompute_shrinks_monotonically_without_correct() {
        let offset = Offset::new(2);
        let guess1 = [sym('C'); COLUMNS];
        let guess2 = [sym('T'); COLUMNS];
        let far = Feedback::new([Classification::Far; COLUMNS]);
        let close = Feedback::new([Classification::Close; COLUMNS]);

        let after_one = recompute([(guess1, far)], offset).unwrap();
        let after_two = recompute([(guess1, far), (guess2, close)], offset).unwrap();

        for (before, after) in after_one.iter().zip(&after_two) {
            assert!(after.is_subset(*before));
        }
        assert_eq!(after_two[0].to_string(), "RSUV");
    }
}
