//! Display functions for the board and command results

use super::formatters::{create_progress_bar, format_possibilities, symbol_char, visible_text};
use crate::commands::{ReplayResult, SimulationResult};
use crate::core::{COLUMNS, Classification, Symbol, Word};
use crate::engine::{GameSession, GameState, KeyHint, PossibilitySet};
use colored::{ColoredString, Colorize};

/// Colour one board cell by its classification
fn paint_cell(symbol: Option<Symbol>, classification: Classification) -> ColoredString {
    let text = format!(" {} ", symbol.map_or('·', symbol_char));
    match classification {
        Classification::Correct => text.black().on_green().bold(),
        Classification::Close => text.black().on_yellow().bold(),
        Classification::Far => text.white().on_bright_black(),
        Classification::Unset => text.normal(),
    }
}

/// Print the whole board, marking the active row
pub fn print_board(session: &GameSession<'_>) {
    let config = session.config();
    println!(
        "\n{} {}",
        config.variant().to_string().bright_cyan().bold(),
        format!("(offset {}, {} rows)", config.offset(), config.lines()).bright_black()
    );
    println!("{}", "─".repeat(24).cyan());

    let active = match session.state() {
        GameState::AwaitingRow(row) => Some(row),
        GameState::Won | GameState::Lost => None,
    };

    for (index, row) in session.rows().iter().enumerate() {
        let cells: String = row
            .cells()
            .iter()
            .zip(row.feedback().classifications())
            .map(|(&cell, &classification)| paint_cell(cell, classification).to_string())
            .collect();
        let marker = if active == Some(index) { "▶" } else { " " };
        println!("{marker} {cells}");
    }

    println!("{}", "─".repeat(24).cyan());
    if !session.is_over() {
        println!("Candidates: {}", session.candidates().len().to_string().bright_yellow());
    }
}

/// Print the first `limit` candidate words, numbered for `/pick`
pub fn print_candidates(candidates: &[&Word], limit: usize) {
    if candidates.is_empty() {
        println!("{}", "No dictionary word fits the evidence.".yellow());
        return;
    }

    println!("\n📋 {}", "Candidates:".bright_cyan().bold());
    for (i, word) in candidates.iter().take(limit).enumerate() {
        println!("   {:3}. {}", i + 1, visible_text(word.symbols()));
    }
    if candidates.len() > limit {
        println!("   ... and {} more", candidates.len() - limit);
    }
}

/// Print every column's remaining symbols
pub fn print_possibilities(columns: &[PossibilitySet; COLUMNS]) {
    println!("\n🔎 {}", "Possible symbols per column:".bright_cyan().bold());
    for (column, set) in columns.iter().enumerate() {
        println!("   {}: {}", column + 1, format_possibilities(*set));
    }
}

/// Print the on-screen keyboard for one column
pub fn print_keyboard(column: usize, hints: &[(Symbol, KeyHint)]) {
    println!("\n⌨️  {}", format!("Keyboard for column {}:", column + 1).bright_cyan().bold());
    let keys: Vec<String> = hints
        .iter()
        .map(|&(symbol, hint)| {
            let key = symbol_char(symbol).to_string();
            match hint {
                KeyHint::Unavailable => key.bright_black().strikethrough().to_string(),
                KeyHint::Available(Classification::Correct) => key.green().bold().to_string(),
                KeyHint::Available(Classification::Close) => key.yellow().bold().to_string(),
                KeyHint::Available(_) => key.white().to_string(),
            }
        })
        .collect();

    for line in keys.chunks(9) {
        println!("   {}", line.join(" "));
    }
}

/// Print the end of game banner with the secret
pub fn print_game_over(session: &GameSession<'_>) {
    let secret = visible_text(session.secret().symbols());
    match session.state() {
        GameState::Won => println!(
            "\n{}",
            format!("🎉 Solved in {} rows! The word was {secret}", session.current_row() + 1)
                .green()
                .bold()
        ),
        GameState::Lost => println!(
            "\n{}",
            format!("💀 Out of rows. The word was {secret}").red().bold()
        ),
        GameState::AwaitingRow(_) => {}
    }
}

/// Print a replayed game row by row
pub fn print_replay_result(result: &ReplayResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Replaying: {}",
        visible_text(result.secret.symbols()).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nRow {}: {} {}",
            i + 1,
            visible_text(step.guess.symbols()),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            for (column, set) in step.possibilities.iter().enumerate() {
                println!("  Column {}:   {}", column + 1, format_possibilities(*set));
            }
        }
    }

    if result.ignored > 0 {
        println!(
            "\n{}",
            format!("{} guesses after the end of the game were ignored", result.ignored).bright_black()
        );
    }

    println!();
    match result.state {
        GameState::Won => println!(
            "{}",
            format!("✅ Solved in {} rows!", result.steps.len()).green().bold()
        ),
        GameState::Lost => println!(
            "{}",
            format!("❌ Not solved in {} rows", result.steps.len()).red().bold()
        ),
        GameState::AwaitingRow(row) => println!(
            "{}",
            format!("⏸  Game still open, next row is {}", row + 1).yellow()
        ),
    }
}

/// Print aggregate statistics of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0).bright_yellow().bold()
    );
    println!("   Lost:             {}", result.lost);
    if result.won > 0 {
        println!("   Average rows:     {:.2}", result.average_rows);
        println!(
            "   Best case:        {}",
            result.min_rows.to_string().green()
        );
        println!(
            "   Worst case:       {}",
            result.max_rows.to_string().yellow()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.distribution.is_empty() {
        return;
    }

    println!("\n📈 {}", "Winning row distribution:".bright_cyan().bold());
    let mut rows: Vec<_> = result.distribution.iter().map(|(&r, &c)| (r, c)).collect();
    rows.sort_unstable();
    for (row, count) in rows {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {row:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
