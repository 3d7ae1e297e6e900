use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::{QuestionRecord, Screen};
use crate::session::{sample, SampleError, Session, SessionReport};

/// Number of questions drawn per attempt unless the CLI overrides it.
pub const DEFAULT_QUESTION_COUNT: usize = 10;

/// Application state: the active screen, the question bank, and the
/// current quiz attempt.
///
/// The bank and the RNG outlive individual attempts; restarting discards
/// the session wholesale and draws a fresh one.
pub struct App {
    pub screen: Screen,
    bank: Vec<QuestionRecord>,
    question_count: usize,
    rng: StdRng,
    session: Session,
    selected_option: usize,
    report: Option<SessionReport>,
}

impl App {
    /// Create an app over a validated question bank.
    ///
    /// Passing a seed makes the sampled questions and option order
    /// reproducible; without one the RNG is seeded from the OS.
    pub fn new(
        bank: Vec<QuestionRecord>,
        question_count: usize,
        seed: Option<u64>,
    ) -> Result<Self, SampleError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let questions = sample(&bank, question_count, &mut rng)?;

        Ok(Self {
            screen: Screen::Welcome,
            bank,
            question_count,
            rng,
            session: Session::new(questions),
            selected_option: 0,
            report: None,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    /// 1-based position of the current question.
    pub fn current_question_number(&self) -> usize {
        self.session.current_index() + 1
    }

    pub fn total_questions(&self) -> usize {
        self.session.len()
    }

    pub fn report(&self) -> Option<SessionReport> {
        self.report
    }

    /// Welcome screen confirmed; show the instructions.
    pub fn start_quiz(&mut self) {
        self.screen = Screen::Intro;
    }

    /// Instructions confirmed; show the first question.
    pub fn begin_questions(&mut self) {
        self.screen = Screen::Quiz;
    }

    pub fn select_next_option(&mut self) {
        let count = self.session.current_question().options().len();
        self.selected_option = (self.selected_option + 1) % count;
    }

    pub fn select_previous_option(&mut self) {
        let count = self.session.current_question().options().len();
        self.selected_option = (self.selected_option + count - 1) % count;
    }

    /// Lock in the highlighted option for the current question.
    pub fn confirm_selection(&mut self) {
        let id = self.session.current_question().id();
        // The cursor is always a valid index for the current question,
        // so this is either a fresh recording or the answer-lock no-op.
        let _ = self.session.select_answer(id, self.selected_option);
    }

    pub fn next_question(&mut self) {
        self.session.next();
        self.sync_cursor();
    }

    pub fn previous_question(&mut self) {
        self.session.previous();
        self.sync_cursor();
    }

    pub fn toggle_explanation(&mut self) {
        self.session.toggle_explanation();
    }

    /// Submit the attempt if every question is answered.
    ///
    /// The quiz screen only offers this once the session is complete;
    /// the session re-verifies and this stays on the quiz screen when it
    /// refuses.
    pub fn submit(&mut self) {
        if let Ok(report) = self.session.submit() {
            self.report = Some(report);
            self.screen = Screen::Results;
        }
    }

    /// Discard the finished attempt and draw a fresh one.
    pub fn restart(&mut self) {
        // The bank was non-empty at construction, so resampling cannot fail.
        if let Ok(questions) = sample(&self.bank, self.question_count, &mut self.rng) {
            self.session = Session::new(questions);
        }
        self.report = None;
        self.selected_option = 0;
        self.screen = Screen::Intro;
    }

    /// Park the cursor on the stored answer when revisiting an answered
    /// question, or on the first option otherwise.
    fn sync_cursor(&mut self) {
        let id = self.session.current_question().id();
        self.selected_option = self.session.answer_for(id).unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(count: usize) -> Vec<QuestionRecord> {
        (1..=count as u32)
            .map(|id| QuestionRecord {
                id,
                text: format!("question {}", id),
                options: (0..4).map(|o| format!("q{} option {}", id, o)).collect(),
                correct_answer: 0,
                explanation: format!("explanation {}", id),
            })
            .collect()
    }

    fn app() -> App {
        App::new(bank(12), DEFAULT_QUESTION_COUNT, Some(7)).unwrap()
    }

    #[test]
    fn empty_bank_is_rejected() {
        assert!(matches!(
            App::new(Vec::new(), DEFAULT_QUESTION_COUNT, Some(7)),
            Err(SampleError::EmptyBank)
        ));
    }

    #[test]
    fn walks_screens_through_a_full_attempt() {
        let mut app = app();
        assert_eq!(app.screen, Screen::Welcome);

        app.start_quiz();
        assert_eq!(app.screen, Screen::Intro);
        app.begin_questions();
        assert_eq!(app.screen, Screen::Quiz);

        // Premature submit must not leave the quiz screen.
        app.submit();
        assert_eq!(app.screen, Screen::Quiz);
        assert!(app.report().is_none());

        for _ in 0..app.total_questions() {
            app.confirm_selection();
            app.next_question();
        }
        app.submit();

        assert_eq!(app.screen, Screen::Results);
        let report = app.report().unwrap();
        assert_eq!(report.total_questions, DEFAULT_QUESTION_COUNT);
        assert!(report.score <= report.total_questions);
    }

    #[test]
    fn cursor_wraps_over_current_options() {
        let mut app = app();
        assert_eq!(app.selected_option(), 0);

        app.select_previous_option();
        assert_eq!(app.selected_option(), 3);
        app.select_next_option();
        assert_eq!(app.selected_option(), 0);
    }

    #[test]
    fn cursor_returns_to_stored_answer() {
        let mut app = app();
        app.select_next_option();
        app.select_next_option();
        app.confirm_selection();

        app.next_question();
        assert_eq!(app.selected_option(), 0);

        app.previous_question();
        assert_eq!(app.selected_option(), 2);
    }

    #[test]
    fn restart_draws_a_fresh_session() {
        let mut app = app();
        for _ in 0..app.total_questions() {
            app.confirm_selection();
            app.next_question();
        }
        app.submit();
        assert!(app.report().is_some());

        app.restart();
        assert_eq!(app.screen, Screen::Intro);
        assert!(app.report().is_none());
        assert_eq!(app.session().answered_count(), 0);
        assert_eq!(app.total_questions(), DEFAULT_QUESTION_COUNT);
    }
}
