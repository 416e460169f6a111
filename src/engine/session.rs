//! One play-through of Warmle
//!
//! A session owns the secret word, the board rows and the derived constraint state.
//! The presentation layer drives it with cell edits and row submissions and reads back
//! classifications, column possibility sets and the candidate list.
//!
//! Lifecycle:
//! - `AwaitingRow(r)`: row `r` is editable
//! - submitting a complete row scores it, then moves to `Won`, `Lost` or `AwaitingRow(r + 1)`
//! - `new_game` is available from every state

use super::{GameConfig, GameError, PossibilitySet, Variant, filter_candidates, recompute};
use crate::core::{COLUMNS, Classification, Feedback, LETTER_COUNT, Offset, Symbol, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info, warn};

/// Observable state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Waiting for the given row to be filled and submitted
    AwaitingRow(usize),
    /// A row was entirely Correct
    Won,
    /// The last row was scored without a win
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Outcome of a row submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The row still has empty cells; nothing changed
    Incomplete,
    /// The row was scored
    Scored(RowReport),
}

/// What the presentation layer needs after a row is scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowReport {
    pub row: usize,
    pub guess: Word,
    pub feedback: Feedback,
    pub state: GameState,
    pub candidates: usize,
}

/// How a key of the on-screen keyboard should look for one column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyHint {
    /// Ruled out for this column
    Unavailable,
    /// Still possible; carries the column's classification in the previous scored row
    Available(Classification),
}

/// One board row: entered symbols and their scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Row {
    cells: [Option<Symbol>; COLUMNS],
    feedback: Feedback,
}

impl Row {
    #[must_use]
    pub const fn cells(&self) -> &[Option<Symbol>; COLUMNS] {
        &self.cells
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// The entered symbols, if every cell is filled
    #[must_use]
    pub fn guess(&self) -> Option<[Symbol; COLUMNS]> {
        let mut symbols = [Symbol::BLANK; COLUMNS];
        for (slot, cell) in symbols.iter_mut().zip(&self.cells) {
            *slot = (*cell)?;
        }
        Some(symbols)
    }
}

/// A single game of Warmle
///
/// # Examples
/// ```
/// use warmle::core::Word;
/// use warmle::engine::{GameConfig, GameSession, GameState, Submission};
///
/// let dictionary = vec![Word::new("apple").unwrap(), Word::new("crane").unwrap()];
/// let secret = Word::new("apple").unwrap();
/// let mut session = GameSession::with_secret(&dictionary, GameConfig::default(), secret);
///
/// let Submission::Scored(report) = session.guess("apple").unwrap() else {
///     panic!("row was complete");
/// };
/// assert!(report.feedback.is_solved());
/// assert_eq!(session.state(), GameState::Won);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    dictionary: &'a [Word],
    config: GameConfig,
    pending: GameConfig,
    secret: Word,
    rows: Vec<Row>,
    current_row: usize,
    state: GameState,
    columns: [PossibilitySet; COLUMNS],
    candidates: Vec<&'a Word>,
}

impl<'a> GameSession<'a> {
    /// Start a new game with a random secret and a random, already scored first row
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if there is no word to pick.
    pub fn new<R: Rng + ?Sized>(
        dictionary: &'a [Word],
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let secret = choose_secret(dictionary, rng)?;
        let mut session = Self::with_secret(dictionary, config, secret);
        session.seed_first_row(rng)?;
        Ok(session)
    }

    /// Start a game with a known secret and an empty board
    ///
    /// The secret does not need to be in the dictionary.
    #[must_use]
    pub fn with_secret(dictionary: &'a [Word], config: GameConfig, secret: Word) -> Self {
        info!(
            variant = %config.variant(),
            offset = %config.offset(),
            lines = config.lines(),
            words = dictionary.len(),
            "new game"
        );
        Self {
            dictionary,
            config,
            pending: config,
            secret,
            rows: vec![Row::default(); config.lines()],
            current_row: 0,
            state: GameState::AwaitingRow(0),
            columns: [PossibilitySet::FULL; COLUMNS],
            candidates: Vec::new(),
        }
    }

    /// Replace the current game with a fresh one using the pending configuration
    ///
    /// Returns the report of the randomly seeded first row.
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if there is no word to pick.
    pub fn new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<RowReport, GameError> {
        let secret = choose_secret(self.dictionary, rng)?;
        *self = Self::with_secret(self.dictionary, self.pending, secret);
        self.seed_first_row(rng)
    }

    /// Configuration to use from the next new game on
    pub const fn set_config(&mut self, config: GameConfig) {
        self.pending = config;
    }

    /// Select a variant for the next new game; the current game keeps its offset
    pub const fn set_variant(&mut self, variant: Variant) {
        self.pending = self.pending.with_variant(variant);
    }

    /// Put a symbol in a cell of the active row
    ///
    /// # Errors
    /// Returns an error if the game is over, the column is off the board, or the symbol
    /// is a filler.
    pub fn set_cell(&mut self, column: usize, symbol: Symbol) -> Result<(), GameError> {
        if !symbol.is_guessable() {
            return Err(GameError::UnplayableSymbol(symbol.to_char()));
        }
        *self.active_cell(column)? = Some(symbol);
        Ok(())
    }

    /// Empty a cell of the active row
    ///
    /// # Errors
    /// Returns an error if the game is over or the column is off the board.
    pub fn clear_cell(&mut self, column: usize) -> Result<(), GameError> {
        *self.active_cell(column)? = None;
        Ok(())
    }

    /// Fill the whole active row with a word
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the game is over.
    pub fn fill_row(&mut self, word: &Word) -> Result<(), GameError> {
        for (column, &symbol) in word.symbols().iter().enumerate() {
            self.set_cell(column, symbol)?;
        }
        Ok(())
    }

    /// Fill the active row with the candidate at `index` of [`Self::candidates`]
    ///
    /// # Errors
    /// Returns `GameError::NoSuchCandidate` if the index is out of range.
    pub fn pick_candidate(&mut self, index: usize) -> Result<(), GameError> {
        let word = *self
            .candidates
            .get(index)
            .ok_or(GameError::NoSuchCandidate(index))?;
        self.fill_row(word)
    }

    /// Fill the active row from typed text and submit it
    ///
    /// # Errors
    /// Returns an error if the text is not a valid guess or the game is over.
    pub fn guess(&mut self, text: &str) -> Result<Submission, GameError> {
        let word = Word::parse(text)?;
        self.fill_row(&word)?;
        self.submit_row()
    }

    /// Score the active row if every cell is filled
    ///
    /// An incomplete row is left untouched and reported as [`Submission::Incomplete`].
    ///
    /// # Errors
    /// Returns `GameError::GameOver` once the game is won or lost.
    pub fn submit_row(&mut self) -> Result<Submission, GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver);
        }
        let Some(guess) = self.rows[self.current_row].guess() else {
            return Ok(Submission::Incomplete);
        };
        self.score_row(guess).map(Submission::Scored)
    }

    /// Keyboard hints for one column: every guessable symbol with its hint
    ///
    /// # Errors
    /// Returns `GameError::ColumnOutOfRange` if the column is off the board.
    pub fn keyboard_hints(&self, column: usize) -> Result<Vec<(Symbol, KeyHint)>, GameError> {
        let set = self
            .columns
            .get(column)
            .ok_or(GameError::ColumnOutOfRange(column))?;
        let previous = self
            .last_scored_row()
            .map_or(Classification::Unset, |row| row.feedback.get(column));

        Ok(Symbol::guessable()
            .map(|symbol| {
                let hint = if set.contains(symbol) {
                    KeyHint::Available(previous)
                } else {
                    KeyHint::Unavailable
                };
                (symbol, hint)
            })
            .collect())
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Index of the active row, clamped to the last row once the game is lost
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Configuration of the game in progress
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Configuration the next new game will use
    #[must_use]
    pub const fn pending_config(&self) -> &GameConfig {
        &self.pending
    }

    #[must_use]
    pub const fn offset(&self) -> Offset {
        self.config.offset()
    }

    /// Column possibility sets as of the last scored, unsolved row
    #[must_use]
    pub const fn possibilities(&self) -> &[PossibilitySet; COLUMNS] {
        &self.columns
    }

    /// Dictionary words consistent with [`Self::possibilities`], in dictionary order
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    fn active_cell(&mut self, column: usize) -> Result<&mut Option<Symbol>, GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver);
        }
        self.rows[self.current_row]
            .cells
            .get_mut(column)
            .ok_or(GameError::ColumnOutOfRange(column))
    }

    fn last_scored_row(&self) -> Option<&Row> {
        self.rows.iter().rev().find(|row| row.feedback.is_scored())
    }

    fn seed_first_row<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<RowReport, GameError> {
        let guess: [Symbol; COLUMNS] = std::array::from_fn(|_| random_guessable(&mut *rng));
        self.rows[self.current_row].cells = guess.map(Some);
        self.score_row(guess)
    }

    fn score_row(&mut self, guess: [Symbol; COLUMNS]) -> Result<RowReport, GameError> {
        let row = self.current_row;
        let feedback = Feedback::calculate(self.secret.symbols(), &guess, self.config.offset());
        self.rows[row].feedback = feedback;

        let guess = Word::from_symbols(guess);
        debug!(row, guess = %guess, feedback = %feedback.to_emoji(), "row scored");

        if feedback.is_solved() {
            self.state = GameState::Won;
            info!(rows = row + 1, secret = %self.secret, "game won");
        } else {
            self.refresh_candidates()?;
            if row + 1 >= self.config.lines() {
                self.state = GameState::Lost;
                info!(secret = %self.secret, "game lost");
            } else {
                self.current_row = row + 1;
                self.state = GameState::AwaitingRow(self.current_row);
            }
        }

        Ok(RowReport {
            row,
            guess,
            feedback,
            state: self.state,
            candidates: self.candidates.len(),
        })
    }

    fn refresh_candidates(&mut self) -> Result<(), GameError> {
        let history = self
            .rows
            .iter()
            .filter_map(|row| row.guess().map(|guess| (guess, row.feedback)));
        self.columns = recompute(history, self.config.offset())?;
        self.candidates = filter_candidates(self.dictionary, &self.columns);

        debug!(candidates = self.candidates.len(), "candidates refreshed");
        if self.candidates.is_empty() {
            warn!(secret = %self.secret, "no dictionary word matches the evidence");
        }
        Ok(())
    }
}

fn choose_secret<R: Rng + ?Sized>(dictionary: &[Word], rng: &mut R) -> Result<Word, GameError> {
    dictionary
        .choose(rng)
        .cloned()
        .ok_or(GameError::EmptyDictionary)
}

/// One of the 26 letters or the blank, uniformly
fn random_guessable<R: Rng + ?Sized>(rng: &mut R) -> Symbol {
    Symbol::from_index(rng.random_range(0..=LETTER_COUNT))
        .filter(|symbol| symbol.is_letter())
        .unwrap_or(Symbol::BLANK)
}
