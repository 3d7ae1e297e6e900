//! # deepfake-quiz
//!
//! A terminal quiz about spotting synthetic media. Each attempt draws a
//! random subset of a question bank, shuffles every question's answer
//! options, locks in the first answer per question, and scores the
//! attempt once every question is answered.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use deepfake_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load the question bank and draw a 10-question session
//!     let quiz = Quiz::from_json("questions.json")?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, DEFAULT_QUESTION_COUNT};
pub use data::{load_bank_from_json, parse_bank, LoadError};
pub use models::{QuestionRecord, Screen};
pub use session::{
    sample, AnswerFeedback, SampleError, Session, SessionError, SessionQuestion, SessionReport,
};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading the question bank.
    Load(LoadError),
    /// Error drawing a session from the bank.
    Sample(SampleError),
    /// IO error during quiz execution.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load questions: {}", e),
            QuizError::Sample(e) => write!(f, "Failed to start session: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Sample(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<SampleError> for QuizError {
    fn from(err: SampleError) -> Self {
        QuizError::Sample(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a quiz over a validated bank.
    ///
    /// `question_count` caps the draw; a smaller bank degrades to its
    /// own size. A seed makes the draw reproducible.
    pub fn new(
        bank: Vec<QuestionRecord>,
        question_count: usize,
        seed: Option<u64>,
    ) -> Result<Self, QuizError> {
        Ok(Self {
            app: App::new(bank, question_count, seed)?,
        })
    }

    /// Load a quiz from a JSON bank file with the default draw size.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use deepfake_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let bank = load_bank_from_json(path)?;
        Self::new(bank, DEFAULT_QUESTION_COUNT, None)
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let (mut terminal, _guard) = terminal::init()?;
        run_event_loop(&mut terminal, &mut self.app)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.screen {
        Screen::Welcome => handle_welcome_input(app, key),
        Screen::Intro => handle_intro_input(app, key),
        Screen::Quiz => handle_quiz_input(app, key),
        Screen::Results => handle_results_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_intro_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.begin_questions();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.confirm_selection();
            false
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.previous_question();
            false
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.next_question();
            false
        }
        KeyCode::Char('e') => {
            app.toggle_explanation();
            false
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.submit();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_results_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> Vec<QuestionRecord> {
        (1..=4u32)
            .map(|id| QuestionRecord {
                id,
                text: format!("question {}", id),
                options: vec!["a".to_string(), "b".to_string()],
                correct_answer: 0,
                explanation: format!("explanation {}", id),
            })
            .collect()
    }

    #[test]
    fn enter_walks_welcome_and_intro() {
        let mut quiz = Quiz::new(bank(), 4, Some(1)).unwrap();
        let app = quiz.app_mut();

        assert!(!handle_input(app, KeyCode::Enter));
        assert_eq!(app.screen, Screen::Intro);
        assert!(!handle_input(app, KeyCode::Enter));
        assert_eq!(app.screen, Screen::Quiz);
    }

    #[test]
    fn q_quits_on_every_screen() {
        let mut quiz = Quiz::new(bank(), 4, Some(1)).unwrap();
        let app = quiz.app_mut();

        assert!(handle_input(app, KeyCode::Char('q')));
        app.start_quiz();
        assert!(handle_input(app, KeyCode::Char('q')));
        app.begin_questions();
        assert!(handle_input(app, KeyCode::Char('Q')));
    }

    #[test]
    fn submit_key_finishes_a_complete_session() {
        let mut quiz = Quiz::new(bank(), 4, Some(1)).unwrap();
        let app = quiz.app_mut();
        app.start_quiz();
        app.begin_questions();

        for _ in 0..app.total_questions() {
            handle_input(app, KeyCode::Enter);
            handle_input(app, KeyCode::Right);
        }
        handle_input(app, KeyCode::Char('s'));

        assert_eq!(app.screen, Screen::Results);
        assert!(app.report().is_some());

        // Retake returns to the instructions with a fresh draw.
        handle_input(app, KeyCode::Char('r'));
        assert_eq!(app.screen, Screen::Intro);
        assert!(app.report().is_none());
    }
}
