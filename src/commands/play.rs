//! Interactive play mode
//!
//! Text-based game on the terminal. The player types guesses; slash commands
//! control the session.

use crate::engine::{GameConfig, GameError, GameSession, Submission, Variant};
use crate::output::{
    print_board, print_candidates, print_game_over, print_keyboard, print_possibilities,
};
use crate::wordlists::Dictionary;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Candidates shown at once by `/words`
const CANDIDATE_LIMIT: usize = 30;

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Letters and blanks for the active row
    Guess(String),
    /// Empty line: submit the row as it is
    Submit,
    Quit,
    NewGame,
    ToggleWords,
    Possibilities,
    Help,
    /// Fill the row with candidate N (1-based)
    Pick(usize),
    /// Keyboard hints for column N (1-based)
    Hint(usize),
    /// Variant id for the next game
    Variant(u8),
    Invalid(String),
}

/// Parse a line typed by the player
#[must_use]
pub fn parse_input(line: &str) -> Input {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    if trimmed.trim().is_empty() {
        return Input::Submit;
    }

    let Some(command) = trimmed.trim().strip_prefix('/') else {
        return Input::Guess(trimmed.to_string());
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default().to_lowercase();
    let number = parts.next().and_then(|n| n.parse::<usize>().ok());

    match (name.as_str(), number) {
        ("quit" | "q" | "exit", _) => Input::Quit,
        ("new" | "n", _) => Input::NewGame,
        ("words" | "w", _) => Input::ToggleWords,
        ("sets" | "s", _) => Input::Possibilities,
        ("help" | "h" | "?", _) => Input::Help,
        ("pick" | "p", Some(n)) if n >= 1 => Input::Pick(n),
        ("hint" | "k", Some(n)) if n >= 1 => Input::Hint(n),
        ("variant" | "v", Some(n)) => match u8::try_from(n).ok().and_then(Variant::from_id) {
            Some(variant) => Input::Variant(variant.id()),
            None => Input::Invalid(format!("unknown variant {n}, use 1, 2 or 3")),
        },
        _ => Input::Invalid(format!("unknown command '/{command}'")),
    }
}

/// Run the interactive play mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// dictionary is empty.
pub fn run_play(dictionary: &Dictionary, config: GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Warmle - Play Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let mut rng = rand::rng();
    let mut session = GameSession::new(dictionary.words(), config, &mut rng)?;
    let mut show_words = false;

    loop {
        print_board(&session);
        if show_words {
            print_candidates(session.candidates(), CANDIDATE_LIMIT);
        }

        if session.is_over() {
            print_game_over(&session);
            match get_user_input("Play again? (yes/no)")?.trim().to_lowercase().as_str() {
                "yes" | "y" => {
                    session.new_game(&mut rng)?;
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let outcome = match parse_input(&get_user_input("Guess")?) {
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::NewGame => session.new_game(&mut rng).map(|_| {
                println!("\n🔄 New game started ({})!\n", session.config().variant());
            }),
            Input::ToggleWords => {
                show_words = !show_words;
                Ok(())
            }
            Input::Possibilities => {
                print_possibilities(session.possibilities());
                Ok(())
            }
            Input::Help => {
                print_help();
                Ok(())
            }
            Input::Hint(column) => session.keyboard_hints(column - 1).map(|hints| {
                print_keyboard(column - 1, &hints);
            }),
            Input::Pick(n) => session.pick_candidate(n - 1).map(|()| {
                println!("Row filled, press Enter to submit.");
            }),
            Input::Variant(id) => {
                if let Some(variant) = Variant::from_id(id) {
                    session.set_variant(variant);
                    println!("{variant} selected, it applies from the next game.");
                }
                Ok(())
            }
            Input::Guess(text) => session.guess(&text).map(report_submission),
            Input::Submit => session.submit_row().map(report_submission),
            Input::Invalid(message) => {
                println!("{}", format!("❌ {message}").red());
                Ok(())
            }
        };

        if let Err(error) = outcome {
            report_error(&error);
        }
    }
}

fn report_submission(submission: Submission) {
    match submission {
        Submission::Incomplete => println!("{}", "Row is not complete yet.".yellow()),
        Submission::Scored(report) => {
            println!(
                "Row {}: {} {}  ({} candidates)",
                report.row + 1,
                report.guess,
                report.feedback.to_emoji(),
                report.candidates
            );
        }
    }
}

fn report_error(error: &GameError) {
    println!("{}", format!("❌ {error}").red());
}

fn print_help() {
    println!("Every letter is scored against the letter in the same column:");
    println!("  🟩 correct   🟨 close (within the variant's offset)   ⬜ far\n");
    println!("Type a guess of up to 5 letters ('_' or trailing space is a blank).");
    println!("Commands: /new  /words  /pick N  /hint COL  /sets  /variant 1-3  /help  /quit\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input)
}
