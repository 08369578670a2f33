//! Wordle Referee - CLI
//!
//! Play Wordle in a TUI or on the command line, score fixed guess lists and
//! simulate many concurrent games.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use wordle_referee::{
    commands::{ScoreConfig, SimulateConfig, run_simple, run_simulation, score_guesses},
    core::Word,
    game::{DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH, Rules},
    logging,
    output::{print_score_report, print_simulation_result},
    wordlists::{
        RandomPicker, TARGETS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_referee",
    about = "Wordle game referee: scores guesses and tracks progress",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guesses allowed per game
    #[arg(short = 'g', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: usize,

    /// Target list: 'builtin' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed for target picking, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Score a list of guesses against a known target
    Score {
        /// The target word
        target: String,

        /// Guesses to play, in order
        #[arg(required = true)]
        guesses: Vec<String>,

        /// Print the final progress as JSON
        #[arg(long)]
        json: bool,
    },

    /// Simulate many concurrent players against a shared game store
    Simulate {
        /// Number of rooms
        #[arg(short, long, default_value = "8")]
        rooms: usize,

        /// Players in each room
        #[arg(short, long, default_value = "16")]
        players: usize,

        /// Rounds to play; rooms get new targets between rounds
        #[arg(long, default_value = "1")]
        rounds: usize,
    },
}

/// Load target words based on the -w flag
///
/// Only words of the configured length are kept.
fn load_words(wordlist: &str, rules: &Rules) -> Result<Vec<Word>> {
    let words = match wordlist {
        "builtin" => words_from_slice(TARGETS, rules),
        path => load_from_file(path, rules)
            .with_context(|| format!("failed to read word list '{path}'"))?,
    };

    if words.is_empty() {
        bail!(
            "word list '{wordlist}' has no {}-letter words",
            rules.word_length()
        );
    }

    info!(count = words.len(), wordlist, "loaded target words");
    Ok(words)
}

fn make_picker(words: Vec<Word>, seed: Option<u64>) -> RandomPicker {
    match seed {
        Some(seed) => RandomPicker::seeded(words, seed),
        None => RandomPicker::new(words),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let rules = Rules::new(cli.max_guesses, cli.word_length)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            use wordle_referee::interactive::{App, run_tui};

            let words = load_words(&cli.wordlist, &rules)?;
            let app = App::new(rules, make_picker(words, cli.seed))?;
            run_tui(app)
        }
        Commands::Simple => {
            let words = load_words(&cli.wordlist, &rules)?;
            run_simple(&rules, &mut make_picker(words, cli.seed))
        }
        Commands::Score {
            target,
            guesses,
            json,
        } => run_score_command(&rules, target, guesses, json),
        Commands::Simulate {
            rooms,
            players,
            rounds,
        } => {
            let words = load_words(&cli.wordlist, &rules)?;
            let config = SimulateConfig {
                rooms,
                players_per_room: players,
                rounds,
                seed: cli.seed.unwrap_or(0),
            };

            println!(
                "Simulating {rooms} rooms x {players} players x {rounds} rounds over {} words...",
                words.len()
            );
            let result = run_simulation(&rules, &words, &config)?;
            print_simulation_result(&result);
            Ok(())
        }
    }
}

fn run_score_command(
    rules: &Rules,
    target: String,
    guesses: Vec<String>,
    json: bool,
) -> Result<()> {
    let config = ScoreConfig { target, guesses };
    let report = score_guesses(&config, rules)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report.progress)?);
    } else {
        print_score_report(&report, rules);
    }

    // Guesses after the game ended are reported, not treated as failures
    match &report.rejected {
        Some((guess, e)) if !e.is_game_over() => bail!("guess '{guess}' rejected: {e}"),
        _ => Ok(()),
    }
}
