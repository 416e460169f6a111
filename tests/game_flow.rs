//! End-to-end games against the embedded dictionary

use rand::SeedableRng;
use rand::rngs::StdRng;
use warmle::core::{Classification, Feedback, Offset, Symbol, Word};
use warmle::engine::{
    GameConfig, GameError, GameSession, GameState, Submission, Variant, is_consistent,
};
use warmle::wordlists::Dictionary;

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn sym(ch: char) -> Symbol {
    Symbol::from_char(ch).unwrap()
}

fn scored(submission: Submission) -> Feedback {
    match submission {
        Submission::Scored(report) => report.feedback,
        Submission::Incomplete => panic!("expected a scored row"),
    }
}

#[test]
fn crone_against_crane() {
    let dictionary = Dictionary::embedded();
    let mut session = GameSession::with_secret(dictionary.words(), GameConfig::default(), word("crane"));

    let feedback = scored(session.guess("crone").unwrap());
    assert_eq!(feedback.to_emoji(), "🟩🟩⬜🟩🟩");
    assert_eq!(session.offset(), Offset::new(3));

    // Column 2 lost the band L..R around O
    let column = session.possibilities()[2];
    for ch in ['L', 'M', 'N', 'O', 'P', 'Q', 'R'] {
        assert!(!column.contains(sym(ch)), "{ch} should be ruled out");
    }
    assert!(column.contains(sym('A')));
    assert!(session.candidates().iter().all(|w| w.text().starts_with("CR")));
}

#[test]
fn far_guess_removes_its_band() {
    let dictionary = Dictionary::embedded();
    let config = GameConfig::for_variant(Variant::SuperPlus);
    let mut session = GameSession::with_secret(dictionary.words(), config, word("a"));

    let feedback = scored(session.guess("d").unwrap());
    assert_eq!(feedback.get(0), Classification::Far);
    assert_eq!(feedback.count(Classification::Correct), 4);

    let column = session.possibilities()[0];
    assert!(!column.contains(sym('C')));
    assert!(!column.contains(sym('D')));
    assert!(!column.contains(sym('E')));
    assert!(column.contains(sym('A')));
    assert!(column.contains(sym('B')));
    assert!(session.candidates().contains(&&word("a")));
}

#[test]
fn exact_guess_wins() {
    let dictionary = Dictionary::embedded();
    let mut session = GameSession::with_secret(dictionary.words(), GameConfig::default(), word("apple"));

    let feedback = scored(session.guess("apple").unwrap());
    assert!(feedback.is_solved());
    assert_eq!(session.state(), GameState::Won);
    assert_eq!(session.guess("crane"), Err(GameError::GameOver));
}

#[test]
fn eight_misses_lose() {
    let dictionary = Dictionary::embedded();
    let mut session = GameSession::with_secret(dictionary.words(), GameConfig::default(), word("apple"));

    for row in 0..8 {
        assert_eq!(session.state(), GameState::AwaitingRow(row));
        scored(session.guess("zzzzz").unwrap());
    }
    assert_eq!(session.state(), GameState::Lost);
    assert_eq!(session.current_row(), 7);
    assert!(matches!(session.submit_row(), Err(GameError::GameOver)));
}

#[test]
fn pinned_columns_stay_pinned() {
    let dictionary = Dictionary::embedded();
    let mut session = GameSession::with_secret(dictionary.words(), GameConfig::default(), word("slate"));

    scored(session.guess("sxxxx").unwrap());
    assert_eq!(session.possibilities()[0].single(), Some(sym('S')));

    for guess in ["crane", "zebra", "mmmmm"] {
        scored(session.guess(guess).unwrap());
        assert_eq!(session.possibilities()[0].single(), Some(sym('S')));
    }
}

#[test]
fn secret_always_survives_filtering() {
    let dictionary = Dictionary::embedded();
    let mut rng = StdRng::seed_from_u64(2024);

    for variant in Variant::ALL {
        for _ in 0..20 {
            let mut session =
                GameSession::new(dictionary.words(), GameConfig::for_variant(variant), &mut rng).unwrap();

            while !session.is_over() {
                let secret = session.secret().clone();
                assert!(session.candidates().contains(&&secret));
                for candidate in session.candidates() {
                    assert!(is_consistent(candidate, session.possibilities()));
                }
                session.pick_candidate(session.candidates().len() - 1).unwrap();
                session.submit_row().unwrap();
            }
        }
    }
}
