//! Warmle - CLI
//!
//! Play Warmle on the terminal, replay a fixed game, or simulate many games.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use warmle::{
    commands::{ReplayConfig, SimulationConfig, replay_game, run_play, run_simulation},
    engine::{GameConfig, Variant},
    output::{print_replay_result, print_simulation_result},
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "warmle",
    about = "Warmle: guess the word, scored by how far each letter is from the answer",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Variant: warmle (offset 3), super (offset 2), super-plus (offset 1)
    #[arg(long, global = true, value_enum, default_value_t = Variant::Warmle)]
    variant: Variant,

    /// Custom Close tolerance, overriding the variant's
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    offset: Option<i64>,

    /// Number of board rows
    #[arg(short, long, global = true, default_value_t = warmle::engine::DEFAULT_LINES)]
    lines: usize,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Log engine decisions to stderr (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Play random games and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Base seed; game i uses seed + i
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Score a fixed list of guesses against a known secret
    Replay {
        /// The secret word
        secret: String,

        /// Guesses in order
        #[arg(required = true)]
        guesses: Vec<String>,

        /// Show candidate counts and column possibilities
        #[arg(short, long)]
        verbose: bool,
    },
}

fn init_logging(debug: bool) {
    let default = if debug { "warmle=debug" } else { "warmle=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    let dictionary = match wordlist {
        "embedded" => Dictionary::embedded(),
        path => Dictionary::load(path).with_context(|| format!("failed to load wordlist {path}"))?,
    };
    info!(words = dictionary.len(), source = wordlist, "dictionary loaded");
    Ok(dictionary)
}

fn game_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::for_variant(cli.variant).with_lines(cli.lines)?;
    if let Some(offset) = cli.offset {
        config = config.with_offset(offset)?;
    }
    debug!(?config, "game configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let dictionary = load_dictionary(&cli.wordlist)?;
    let config = game_config(&cli)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&dictionary, config),
        Commands::Simulate {
            count,
            seed,
            no_progress,
        } => {
            let result = run_simulation(
                &dictionary,
                &SimulationConfig {
                    games: count,
                    seed,
                    game: config,
                    show_progress: !no_progress,
                },
            )?;
            print_simulation_result(&result);
            Ok(())
        }
        Commands::Replay {
            secret,
            guesses,
            verbose,
        } => {
            let replay = ReplayConfig {
                secret,
                guesses,
                game: config,
            };
            let result = replay_game(&replay, &dictionary)?;
            print_replay_result(&result, verbose);
            Ok(())
        }
    }
}
