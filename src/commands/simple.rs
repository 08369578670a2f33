//! Simple interactive CLI mode
//!
//! Text-based game without TUI: the program picks a target and the user
//! types guesses.

use crate::game::{GameStatus, Progress, Rules};
use crate::output::{print_board, print_outcome};
use crate::wordlists::WordPicker;
use anyhow::{Result, anyhow};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// picker has no target words.
pub fn run_simple<P: WordPicker + ?Sized>(rules: &Rules, picker: &mut P) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {}-letter word in {} tries.",
        rules.word_length(),
        rules.max_guesses()
    );
    println!(
        "  {} right letter, right spot   {} right letter, wrong spot   {} not in the word\n",
        " A ".black().on_green(),
        " A ".black().on_yellow(),
        " A ".white().on_bright_black()
    );
    println!("Commands: 'quit' or 'q' to exit, 'new' or 'n' to give up and start over\n");

    'games: loop {
        let target = picker
            .pick()
            .ok_or_else(|| anyhow!("no {}-letter target words available", rules.word_length()))?;
        let mut progress = Progress::new();

        loop {
            let turn = progress.tries().len() + 1;
            let Some(input) = get_user_input(&format!("Guess {turn}/{}", rules.max_guesses()))?
            else {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            };

            match parse_command(&input, rules) {
                Some(Command::Quit) => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                Some(Command::NewGame) => {
                    println!("The word was {}.", target.text().to_uppercase().bold());
                    println!("\n🔄 New game started!\n");
                    continue 'games;
                }
                Some(Command::Skip) => continue,
                None => {}
            }

            let attempt = rules
                .parse_word(&input)
                .map_err(Into::into)
                .and_then(|guess| progress.make_try(&guess, &target, rules));

            match attempt {
                Ok(next) => progress = next,
                Err(e) => {
                    println!("❌ {e}\n");
                    continue;
                }
            }

            println!();
            print_board(&progress, rules);
            println!();

            if progress.status(rules) != GameStatus::InProgress {
                print_outcome(&progress, rules, &target);
                break;
            }
        }

        let again = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
        if !matches!(again.to_lowercase().as_str(), "yes" | "y") {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }
        println!("\n🔄 New game started!\n");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    Skip,
}

/// Recognize a command, or `None` if the input should be played as a guess
///
/// Input with exactly the configured word length is always a guess, so no
/// command can shadow a playable word.
fn parse_command(input: &str, rules: &Rules) -> Option<Command> {
    if input.is_empty() {
        return Some(Command::Skip);
    }
    if input.chars().count() == rules.word_length() {
        return None;
    }

    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Some(Command::Quit),
        "new" | "n" => Some(Command::NewGame),
        _ => None,
    }
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
