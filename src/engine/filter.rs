//! Candidate word filtering

use super::PossibilitySet;
use crate::core::{COLUMNS, Word};

/// Check if every symbol of `word` is still possible in its column
#[inline]
#[must_use]
pub fn is_consistent(word: &Word, columns: &[PossibilitySet; COLUMNS]) -> bool {
    word.symbols()
        .iter()
        .zip(columns)
        .all(|(&symbol, set)| set.contains(symbol))
}

/// Filter dictionary words to those consistent with the column possibility sets
///
/// Output keeps dictionary order.
///
/// # Examples
/// ```
/// use warmle::core::{COLUMNS, Word};
/// use warmle::engine::{PossibilitySet, filter_candidates};
///
/// let dictionary = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
/// let mut columns = [PossibilitySet::FULL; COLUMNS];
/// columns[0] = PossibilitySet::singleton(dictionary[1].symbol_at(0));
///
/// let candidates = filter_candidates(&dictionary, &columns);
/// assert_eq!(candidates, vec![&dictionary[1]]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(dictionary: &'a [Word], columns: &[PossibilitySet; COLUMNS]) -> Vec<&'a Word> {
    dictionary
        .iter()
        .filter(|word| is_consistent(word, columns))
        .collect()
}
