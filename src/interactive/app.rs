//! TUI application state and logic

use crate::commands::find_solutions;
use crate::dictionary::WordListDictionary;
use crate::game::{Session, Submission};
use crate::output::{rejection_message, rejection_title};
use crate::validator::WordValidator;
use crate::wordlists::RootWords;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest input the text field accepts
const MAX_INPUT_LEN: usize = 32;

/// Application state
pub struct App<'a> {
    pub session: Session,
    pub validator: WordValidator<'a, WordListDictionary>,
    pub roots: &'a RootWords,
    pub rng: StdRng,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// Score available if every solution were found
    pub max_score: usize,
    pub solution_count: usize,
    pub games_played: usize,
    pub best_score: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        dictionary: &'a WordListDictionary,
        locale: &str,
        roots: &'a RootWords,
        mut rng: StdRng,
    ) -> Self {
        let session = Session::new(roots.pick(&mut rng));

        let mut app = Self {
            session,
            validator: WordValidator::with_locale(dictionary, locale),
            roots,
            rng,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Make words from the letters of the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            max_score: 0,
            solution_count: 0,
            games_played: 1,
            best_score: 0,
            should_quit: false,
        };
        app.refresh_solutions();
        app
    }

    fn refresh_solutions(&mut self) {
        let solutions = find_solutions(
            self.session.root(),
            self.validator.dictionary(),
            self.validator.locale(),
        );
        self.max_score = solutions.max_score;
        self.solution_count = solutions.count();
    }

    /// Submit whatever is in the input field
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit(&input, &self.validator) {
            Submission::Ignored => {}
            Submission::Accepted { word, points } => {
                self.best_score = self.best_score.max(self.session.score());
                self.add_message(
                    &format!("{} +{points}", word.to_uppercase()),
                    MessageStyle::Success,
                );
                if self.session.used_words().len() == self.solution_count {
                    self.add_message("🎉 You found every word!", MessageStyle::Success);
                }
            }
            Submission::Rejected { reason, .. } => {
                let text = format!(
                    "{}: {}",
                    rejection_title(reason),
                    rejection_message(reason, self.session.root())
                );
                self.add_message(&text, MessageStyle::Error);
            }
        }
    }

    /// Start over with a fresh random root
    pub fn new_game(&mut self) {
        let root = self.roots.pick(&mut self.rng).to_string();
        self.session.restart(&root);
        self.input_buffer.clear();
        self.messages.clear();
        self.games_played += 1;
        self.refresh_solutions();
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

    pub fn push_char(&mut self, c: char) {
        if self.input_buffer.chars().count() < MAX_INPUT_LEN && !c.is_control() {
            self.input_buffer.push(c);
        }
    }

    /// Fraction of the available score earned so far, as a percentage
    #[must_use]
    pub fn progress_percent(&self) -> u16 {
        if self.max_score == 0 {
            return 0;
        }
        ((self.session.score() as f64 / self.max_score as f64) * 100.0).min(100.0) as u16
    }

    /// Apply a single key press to the game state
    pub fn handle_key(&mut self, key: KeyEvent) {
        let chord = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) if !chord => {
                self.push_char(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                self.submit_input();
            }
            _ => {}
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key);
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
    use rand::SeedableRng;

    fn fixture() -> (WordListDictionary, RootWords) {
        (
            WordListDictionary::from_words("en", ["silkworm", "silk", "worm", "milk"]),
            RootWords::from_text("silkworm"),
        )
    }

    #[test]
    fn new_app_knows_available_score() {
        let (dict, roots) = fixture();
        let app = App::new(&dict, "en", &roots, StdRng::seed_from_u64(0));

        assert_eq!(app.session.root(), "silkworm");
        assert_eq!(app.solution_count, 3);
        assert_eq!(app.max_score, 12);
        assert_eq!(app.progress_percent(), 0);
    }

    #[test]
    fn typing_and_submitting() {
        let (dict, roots) = fixture();
        let mut app = App::new(&dict, "en", &roots, StdRng::seed_from_u64(0));

        for c in "Silk".chars() {
            app.push_char(c);
        }
        app.submit_input();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.score(), 4);
        assert_eq!(app.best_score, 4);
        assert_eq!(app.progress_percent(), 33);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn rejection_becomes_error_message() {
        let (dict, roots) = fixture();
        let mut app = App::new(&dict, "en", &roots, StdRng::seed_from_u64(0));

        app.input_buffer = "silkk".to_string();
        app.submit_input();

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.starts_with("Word not possible"));
        assert_eq!(app.session.score(), 0);
    }

    #[test]
    fn finding_every_word_is_celebrated() {
        let (dict, roots) = fixture();
        let mut app = App::new(&dict, "en", &roots, StdRng::seed_from_u64(0));

        for word in ["silk", "worm", "milk"] {
            app.input_buffer = word.to_string();
            app.submit_input();
        }

        assert_eq!(app.progress_percent(), 100);
        assert!(app.messages.iter().any(|m| m.text.contains("every word")));
    }

    #[test]
    fn new_game_resets_session_but_keeps_best() {
        let (dict, roots) = fixture();
        let mut app = App::new(&dict, "en", &roots, StdRng::seed_from_u64(0));
        app.input_buffer = "worm".to_string();
        app.submit_input();

        app.new_game();

        assert_eq!(app.session.score(), 0);
        assert!(app.session.used_words().is_empty());
        assert_eq!(app.best_score, 4);
        assert_eq!(app.games_played, 2);
    }

    #[test]
    fn control_chars_and_overlong_input_are_dropped() {
        let (dict, roots) = fixture();
        let mut app = App::new(&dict, "en", &roots, StdRng::seed_from_u64(0));

        app.push_char('\u{7}');
        assert!(app.input_buffer.is_empty());

        for _ in 0..(MAX_INPUT_LEN + 5) {
            app.push_char('a');
        }
        assert_eq!(app.input_buffer.len(), MAX_INPUT_LEN);
    }

    #[test]
    fn message_log_is_bounded() {
        let (dict, roots) = fixture();
        let mut app = App::new(&dict, "en", &roots, StdRng::seed_from_u64(0));
        for i in 0..10 {
            app.add_message(&format!("note {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "note 9");
    }

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        app.handle_key(KeyEvent::new(code, modifiers));
    }

    #[test]
    fn keys_edit_and_submit_input() {
        let (dict, roots) = fixture();
        let mut app = App::new(&dict, "en", &roots, StdRng::seed_from_u64(0));

        for c in "milkx".chars() {
            press(&mut app, KeyCode::Char(c), KeyModifiers::NONE);
        }
        press(&mut app, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.input_buffer, "milk");

        press(&mut app, KeyCode::Char('M'), KeyModifiers::SHIFT);
        press(&mut app, KeyCode::Backspace, KeyModifiers::NONE);
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.score(), 4);
    }

    #[test]
    fn modifier_chords_do_not_type() {
        let (dict, roots) = fixture();
        let mut app = App::new(&dict, "en", &roots, StdRng::seed_from_u64(0));

        press(&mut app, KeyCode::Char('w'), KeyModifiers::CONTROL);
        press(&mut app, KeyCode::Char('a'), KeyModifiers::ALT);
        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL | KeyModifiers::SHIFT);

        assert!(app.input_buffer.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn control_n_starts_new_game() {
        let (dict, roots) = fixture();
        let mut app = App::new(&dict, "en", &roots, StdRng::seed_from_u64(0));
        let games = app.games_played;

        press(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL);

        assert_eq!(app.games_played, games + 1);
        assert!(app.input_buffer.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn escape_and_control_c_quit() {
        let (dict, roots) = fixture();
        let mut app = App::new(&dict, "en", &roots, StdRng::seed_from_u64(0));
        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit);

        let mut app = App::new(&dict, "en", &roots, StdRng::seed_from_u64(0));
        press(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
        assert!(app.input_buffer.is_empty());
    }
}
