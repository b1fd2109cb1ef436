//! TUI application state and logic

use crate::core::{Difficulty, Game, Letter, Outcome, WordPool};
use crate::output::formatters::latest_piece;
use crate::storage::HighScoreStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Most recent messages kept in the log and shown by the renderer
pub const MESSAGE_LIMIT: usize = 5;

/// Letter rows for the on-screen keyboard
///
/// The mapping from letter to control identity lives here, in the
/// presentation layer; the core only ever sees `Letter` values.
#[derive(Debug, Clone)]
pub struct KeyboardLayout {
    rows: Vec<Vec<char>>,
}

impl KeyboardLayout {
    /// Standard three-row QWERTY layout
    #[must_use]
    pub fn qwerty() -> Self {
        Self {
            rows: vec![
                "QWERTYUIOP".chars().collect(),
                "ASDFGHJKL".chars().collect(),
                "ZXCVBNM".chars().collect(),
            ],
        }
    }

    /// Compact six-column grid layout
    #[must_use]
    pub fn six_column() -> Self {
        Self {
            rows: vec![
                "QWERTY".chars().collect(),
                "UIOPAS".chars().collect(),
                "DFGHJK".chars().collect(),
                "LZXCVB".chars().collect(),
                "NM".chars().collect(),
            ],
        }
    }

    /// The key rows, top to bottom
    #[must_use]
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self::qwerty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Letters are forwarded to the round as guesses
    Playing,
    /// The round ended; waiting for a new-round or quit key
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a, P: WordPool> {
    pub game: Game<'a, P>,
    store: Box<dyn HighScoreStore>,
    pub layout: KeyboardLayout,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

impl<'a, P: WordPool> App<'a, P> {
    #[must_use]
    pub fn new(
        pool: &'a P,
        store: Box<dyn HighScoreStore>,
        difficulty: Difficulty,
        layout: KeyboardLayout,
    ) -> Self {
        let game = Game::new(pool, difficulty, store.load());

        Self {
            game,
            store,
            layout,
            messages: vec![
                Message {
                    text: "Welcome! Guess letters to reveal the word before the house is built."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "TAB spends a life on a hint; 1/2/3 switch difficulty.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            input_mode: InputMode::Playing,
            should_quit: false,
        }
    }

    pub fn guess(&mut self, c: char) {
        let Ok(letter) = Letter::new(c) else {
            return;
        };

        match self.game.guess(letter) {
            Outcome::Ignored => {
                self.add_message(&format!("Already guessed '{letter}'."), MessageStyle::Info);
            }
            Outcome::Revealed => {
                self.add_message(&format!("'{letter}' is in the word!"), MessageStyle::Success);
            }
            Outcome::Missed => {
                let text = match latest_piece(self.game.mistakes()) {
                    Some(piece) => format!("No '{letter}' — the {piece} goes up."),
                    None => format!("No '{letter}' — another brick goes up."),
                };
                self.add_message(&text, MessageStyle::Error);
            }
            terminal => self.finish_round(terminal),
        }
    }

    pub fn hint(&mut self) {
        match self.game.hint() {
            Outcome::Ignored => {
                self.add_message(
                    "No hint available — the last life can't be spent on one.",
                    MessageStyle::Error,
                );
            }
            Outcome::Hinted { letter } => {
                self.add_message(
                    &format!("Hint revealed '{letter}' for one life."),
                    MessageStyle::Info,
                );
            }
            terminal => self.finish_round(terminal),
        }
    }

    pub fn new_round(&mut self) {
        self.game.start_new_game();
        self.input_mode = InputMode::Playing;
        self.add_message("New round started!", MessageStyle::Info);
    }

    pub fn change_difficulty(&mut self, difficulty: Difficulty) {
        self.game.set_difficulty(difficulty);
        self.input_mode = InputMode::Playing;
        self.add_message(
            &format!(
                "Difficulty: {difficulty} ({} points per win). New round!",
                difficulty.points()
            ),
            MessageStyle::Info,
        );
    }

    fn finish_round(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won {
                points,
                high_score_beaten,
            } => {
                self.add_message(
                    &format!("🎉 You won! +{points} points."),
                    MessageStyle::Success,
                );
                if high_score_beaten {
                    self.add_message(
                        &format!("🏆 New high score: {}!", self.game.high_score()),
                        MessageStyle::Success,
                    );
                }
            }
            Outcome::Lost => {
                self.add_message(
                    &format!("💥 The word was {}. Score resets.", self.game.target()),
                    MessageStyle::Error,
                );
            }
            _ => return,
        }

        if outcome.signals_persist()
            && let Err(e) = self.store.save(self.game.high_score())
        {
            self.add_message(
                &format!("Failed to save high score: {e}"),
                MessageStyle::Error,
            );
        }

        self.input_mode = InputMode::RoundOver;
        self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the most recent messages
        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<P: WordPool>(app: App<'_, P>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, P: WordPool>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, P>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::Playing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Tab => {
                        app.hint();
                    }
                    KeyCode::Char('1') => app.change_difficulty(Difficulty::Easy),
                    KeyCode::Char('2') => app.change_difficulty(Difficulty::Medium),
                    KeyCode::Char('3') => app.change_difficulty(Difficulty::Hard),
                    KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                        app.guess(c);
                    }
                    _ => {}
                },
                InputMode::RoundOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') | KeyCode::Enter => {
                        app.new_round();
                    }
                    KeyCode::Char('1') => app.change_difficulty(Difficulty::Easy),
                    KeyCode::Char('2') => app.change_difficulty(Difficulty::Medium),
                    KeyCode::Char('3') => app.change_difficulty(Difficulty::Hard),
                    _ => {
                        // Ignore other keys between rounds
                    }
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
    use crate::core::{Status, TargetWord, WordEntry};
    use crate::storage::MemoryStore;

    struct FixedPool(Vec<WordEntry>);

    impl WordPool for FixedPool {
        fn entries(&self, _difficulty: Difficulty) -> &[WordEntry] {
            &self.0
        }
    }

    fn cad_pool() -> FixedPool {
        FixedPool(vec![WordEntry::new(TargetWord::new("CAD").unwrap(), None)])
    }

    #[test]
    fn winning_switches_to_round_over_and_persists() {
        let pool = cad_pool();
        let mut app = App::new(
            &pool,
            Box::new(MemoryStore::default()),
            Difficulty::Easy,
            KeyboardLayout::default(),
        );

        for c in ['c', 'a', 'd'] {
            app.guess(c);
        }

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.game.status(), Status::Won);
        assert_eq!(app.store.load(), 1);
    }

    #[test]
    fn losing_switches_to_round_over() {
        let pool = cad_pool();
        let mut app = App::new(
            &pool,
            Box::new(MemoryStore::default()),
            Difficulty::Easy,
            KeyboardLayout::default(),
        );

        for c in ['x', 'y', 'z', 'q', 'w', 'e'] {
            app.guess(c);
        }

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.game.status(), Status::Lost);
    }

    #[test]
    fn new_round_returns_to_playing() {
        let pool = cad_pool();
        let mut app = App::new(
            &pool,
            Box::new(MemoryStore::default()),
            Difficulty::Easy,
            KeyboardLayout::default(),
        );

        for c in ['c', 'a', 'd'] {
            app.guess(c);
        }
        app.new_round();

        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(app.game.status(), Status::InProgress);
        // Session score carries into the next round
        assert_eq!(app.game.score(), 1);
    }

    #[test]
    fn non_letter_input_is_dropped() {
        let pool = cad_pool();
        let mut app = App::new(
            &pool,
            Box::new(MemoryStore::default()),
            Difficulty::Easy,
            KeyboardLayout::default(),
        );

        let before = app.game.display();
        app.guess('3');
        app.guess('!');
        assert_eq!(app.game.display(), before);
    }

    #[test]
    fn wrong_guess_message_names_the_piece_built() {
        let pool = cad_pool();
        let mut app = App::new(
            &pool,
            Box::new(MemoryStore::default()),
            Difficulty::Easy,
            KeyboardLayout::default(),
        );

        app.guess('x');
        let last = app.messages.last().unwrap();
        assert!(
            last.text.contains("house body"),
            "first miss should name the first piece, got: {}",
            last.text
        );

        app.guess('y');
        assert!(app.messages.last().unwrap().text.contains("roof"));
    }

    #[test]
    fn message_log_is_capped_at_the_render_limit() {
        let pool = cad_pool();
        let mut app = App::new(
            &pool,
            Box::new(MemoryStore::default()),
            Difficulty::Easy,
            KeyboardLayout::default(),
        );

        for _ in 0..20 {
            app.add_message("noise", MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MESSAGE_LIMIT);
    }

    #[test]
    fn keyboard_layouts_cover_the_alphabet() {
        for layout in [KeyboardLayout::qwerty(), KeyboardLayout::six_column()] {
            let letters: Vec<char> = layout.rows().iter().flatten().copied().collect();
            assert_eq!(letters.len(), 26);
            for c in 'A'..='Z' {
                assert!(letters.contains(&c), "layout missing '{c}'");
            }
        }
    }
}
