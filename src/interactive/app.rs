//! TUI application state and logic

use crate::core::Word;
use crate::game::{GameStatus, Progress, Rules};
use crate::wordlists::{RandomPicker, WordPicker};
use anyhow::{Result, anyhow};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub rules: Rules,
    pub picker: RandomPicker,
    pub target: Word,
    pub progress: Progress,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub total_points: usize,
    pub current_streak: usize,
    /// Index `n` counts games won in `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    fn record_win(&mut self, tries: usize, points: usize) {
        self.total_games += 1;
        self.games_won += 1;
        self.total_points += points;
        self.current_streak += 1;
        if self.guess_distribution.len() <= tries {
            self.guess_distribution.resize(tries + 1, 0);
        }
        self.guess_distribution[tries] += 1;
    }

    fn record_loss(&mut self) {
        self.total_games += 1;
        self.current_streak = 0;
    }
}

impl App {
    /// Create the app and pick the first target
    ///
    /// # Errors
    ///
    /// Returns an error if the picker has no words to choose from.
    pub fn new(rules: Rules, mut picker: RandomPicker) -> Result<Self> {
        let target = picker
            .pick()
            .ok_or_else(|| anyhow!("no {}-letter target words available", rules.word_length()))?;

        Ok(Self {
            rules,
            picker,
            target,
            progress: Progress::new(),
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!(
                        "Welcome! Guess the {}-letter word in {} tries.",
                        rules.word_length(),
                        rules.max_guesses()
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        })
    }

    pub fn handle_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        let attempt = self
            .rules
            .parse_word(&input)
            .map_err(Into::into)
            .and_then(|guess| self.progress.make_try(&guess, &self.target, &self.rules));

        match attempt {
            Ok(progress) => self.progress = progress,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }

        match self.progress.status(&self.rules) {
            GameStatus::Won => {
                let tries = self.progress.tries().len();
                let points = self.progress.points(&self.rules).unwrap_or(0);
                self.stats.record_win(tries, points);
                self.input_mode = InputMode::GameOver;

                let celebration = match tries {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    _ => "🎉 SOLVED! 🎉",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message(&format!("+{points} points"), MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.stats.record_loss();
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    &format!(
                        "Out of guesses! The word was {}.",
                        self.target.text().to_uppercase()
                    ),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::InProgress => {
                let remaining = self.progress.remaining(&self.rules);
                self.add_message(
                    &format!(
                        "{remaining} {} left",
                        if remaining == 1 { "guess" } else { "guesses" }
                    ),
                    MessageStyle::Info,
                );
            }
        }
    }

    /// Start over with a new target
    ///
    /// Abandoning a game that already has guesses counts as a loss.
    pub fn new_game(&mut self) {
        if self.input_mode == InputMode::Guessing && !self.progress.tries().is_empty() {
            self.stats.record_loss();
            self.add_message(
                &format!("Gave up. The word was {}.", self.target.text().to_uppercase()),
                MessageStyle::Info,
            );
        }

        if let Some(target) = self.picker.pick() {
            self.target = target;
        }
        self.progress = Progress::new();
        self.input_buffer.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn push_letter(&mut self, c: char) {
        if self.input_buffer.len() < self.rules.word_length() && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal even when the app failed
    with_restore(res, || {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    })
}

/// Run `restore`, then report the app's error first, else the restore error
fn with_restore(res: Result<()>, restore: impl FnOnce() -> Result<()>) -> Result<()> {
    let restored = restore();
    res.and(restored)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') | KeyCode::Enter => {
                        app.new_game();
                    }
                    _ => {
                        // Game is over, ignore other keys
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Tab => {
                        app.new_game();
                    }
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.push_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.handle_guess();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_target(target: &str) -> App {
        let words = vec![Word::new(target).unwrap()];
        App::new(Rules::default(), RandomPicker::seeded(words, 0)).unwrap()
    }

    fn guess(app: &mut App, word: &str) {
        for c in word.chars() {
            app.push_letter(c);
        }
        app.handle_guess();
    }

    #[test]
    fn empty_picker_is_an_error() {
        assert!(App::new(Rules::default(), RandomPicker::seeded(Vec::new(), 0)).is_err());
    }

    #[test]
    fn winning_ends_game_and_updates_stats() {
        let mut app = app_with_target("about");
        guess(&mut app, "agony");
        assert_eq!(app.input_mode, InputMode::Guessing);

        guess(&mut app, "ABOUT");
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert!(app.progress.won());
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.total_points, 4);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn losing_ends_game() {
        let mut app = app_with_target("bobar");
        for word in ["bbqqq", "bqqbb", "qqqra", "bobaa", "aaaaa"] {
            guess(&mut app, word);
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert_eq!(app.messages.iter().filter(|m| m.style == MessageStyle::Error).count(), 1);
    }

    #[test]
    fn short_guess_shows_error_without_using_a_try() {
        let mut app = app_with_target("about");
        guess(&mut app, "abo");

        assert!(app.progress.tries().is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn input_is_limited_to_word_length_letters() {
        let mut app = app_with_target("about");
        for c in "ab1out!x".chars() {
            app.push_letter(c);
        }
        assert_eq!(app.input_buffer, "about");
    }

    #[test]
    fn abandoning_counts_as_loss() {
        let mut app = app_with_target("about");
        guess(&mut app, "agony");
        app.new_game();

        assert_eq!(app.stats.total_games, 1);
        assert!(app.progress.tries().is_empty());
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn app_error_survives_terminal_restore() {
        let mut restored = false;
        let res = with_restore(Err(anyhow!("draw failed")), || {
            restored = true;
            Ok(())
        });

        assert!(restored);
        assert_eq!(res.unwrap_err().to_string(), "draw failed");
    }

    #[test]
    fn restore_error_reported_after_clean_run() {
        let res = with_restore(Ok(()), || Err(anyhow!("restore failed")));
        assert_eq!(res.unwrap_err().to_string(), "restore failed");

        assert!(with_restore(Ok(()), || Ok(())).is_ok());
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app_with_target("about");
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
