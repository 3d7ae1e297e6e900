//! Per-attempt session state machine.

use std::collections::HashMap;
use std::fmt;

use super::sampler::SessionQuestion;

/// Verdict for an answered question.
///
/// Always derived from the stored answer and the question itself, never
/// kept as separate mutable state, so it can be re-read at any time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub is_correct: bool,
    pub explanation: String,
}

/// Final result of a submitted session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionReport {
    pub score: usize,
    pub total_questions: usize,
}

impl SessionReport {
    /// Score as a whole percentage, rounded to the nearest point.
    pub fn percentage(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        ((self.score as f64 / self.total_questions as f64) * 100.0).round() as u32
    }
}

/// Error from a session operation.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The question id does not belong to this session.
    InvalidQuestionId(u32),
    /// The option index is outside the question's options.
    InvalidOptionIndex {
        question_id: u32,
        index: usize,
        count: usize,
    },
    /// Submission attempted with unanswered questions remaining.
    IncompleteSession { answered: usize, total: usize },
    /// A mutating operation arrived after the session was submitted.
    AlreadyCompleted,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidQuestionId(id) => {
                write!(f, "question {} is not part of this session", id)
            }
            SessionError::InvalidOptionIndex {
                question_id,
                index,
                count,
            } => write!(
                f,
                "option {} is out of range for question {} ({} options)",
                index, question_id, count
            ),
            SessionError::IncompleteSession { answered, total } => write!(
                f,
                "cannot submit: {} of {} questions answered",
                answered, total
            ),
            SessionError::AlreadyCompleted => write!(f, "session was already submitted"),
        }
    }
}

impl std::error::Error for SessionError {}

/// One quiz attempt, from sampling through submission.
///
/// Owns every piece of mutable attempt state. Operations either fully
/// apply or fully reject; the session is never left half-mutated.
pub struct Session {
    questions: Vec<SessionQuestion>,
    current: usize,
    answers: HashMap<u32, usize>,
    explanation_visible: bool,
    completed: bool,
}

impl Session {
    /// Start a session over an already-sampled question list.
    ///
    /// The list comes from [`sample`](super::sample), which guarantees
    /// it is non-empty and its ids are unique.
    pub fn new(questions: Vec<SessionQuestion>) -> Self {
        debug_assert!(!questions.is_empty());
        Self {
            questions,
            current: 0,
            answers: HashMap::new(),
            explanation_visible: false,
            completed: false,
        }
    }

    pub fn current_question(&self) -> &SessionQuestion {
        &self.questions[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[SessionQuestion] {
        &self.questions
    }

    pub fn explanation_visible(&self) -> bool {
        self.explanation_visible
    }

    /// The option recorded for a question, if it has been answered.
    pub fn answer_for(&self, question_id: u32) -> Option<usize> {
        self.answers.get(&question_id).copied()
    }

    pub fn is_answered(&self, question_id: u32) -> bool {
        self.answers.contains_key(&question_id)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// True once the session has been submitted.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Record an answer and return its verdict.
    ///
    /// The first answer for a question is final: a repeated call for the
    /// same id leaves the stored answer untouched and returns the stored
    /// answer's verdict instead.
    pub fn select_answer(
        &mut self,
        question_id: u32,
        option_index: usize,
    ) -> Result<AnswerFeedback, SessionError> {
        if self.completed {
            return Err(SessionError::AlreadyCompleted);
        }

        let question = self
            .questions
            .iter()
            .find(|q| q.id() == question_id)
            .ok_or(SessionError::InvalidQuestionId(question_id))?;

        let count = question.options().len();
        if option_index >= count {
            return Err(SessionError::InvalidOptionIndex {
                question_id,
                index: option_index,
                count,
            });
        }

        let chosen = *self.answers.entry(question_id).or_insert(option_index);
        Ok(AnswerFeedback {
            is_correct: chosen == question.correct_option(),
            explanation: question.explanation().to_string(),
        })
    }

    /// Re-derive the verdict for an answered question.
    ///
    /// Returns `None` for unanswered or unknown ids.
    pub fn feedback_for(&self, question_id: u32) -> Option<AnswerFeedback> {
        let question = self.questions.iter().find(|q| q.id() == question_id)?;
        let chosen = self.answer_for(question_id)?;
        Some(AnswerFeedback {
            is_correct: chosen == question.correct_option(),
            explanation: question.explanation().to_string(),
        })
    }

    /// Move to the next question. No-op on the last question.
    pub fn next(&mut self) {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.explanation_visible = false;
        }
    }

    /// Move to the previous question. No-op on the first question.
    pub fn previous(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.explanation_visible = false;
        }
    }

    /// Show or hide the current question's explanation.
    pub fn toggle_explanation(&mut self) {
        self.explanation_visible = !self.explanation_visible;
    }

    /// True iff every question in the session has a recorded answer.
    ///
    /// Gates submission only; navigation is free at any time.
    pub fn is_complete(&self) -> bool {
        self.questions.iter().all(|q| self.is_answered(q.id()))
    }

    /// Score the attempt and seal the session.
    ///
    /// Completeness is re-verified here rather than trusted from the
    /// caller. A second call fails with `AlreadyCompleted`.
    pub fn submit(&mut self) -> Result<SessionReport, SessionError> {
        if self.completed {
            return Err(SessionError::AlreadyCompleted);
        }
        if !self.is_complete() {
            return Err(SessionError::IncompleteSession {
                answered: self.answers.len(),
                total: self.questions.len(),
            });
        }

        let score = self
            .questions
            .iter()
            .filter(|q| self.answer_for(q.id()) == Some(q.correct_option()))
            .count();
        self.completed = true;

        Ok(SessionReport {
            score,
            total_questions: self.questions.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32, correct: usize) -> SessionQuestion {
        SessionQuestion::new(
            id,
            format!("question {}", id),
            vec![
                "first".to_string(),
                "second".to_string(),
                "third".to_string(),
            ],
            correct,
            format!("explanation {}", id),
        )
    }

    /// Session of `n` questions with ids 1..=n, correct option 1.
    fn session(n: u32) -> Session {
        Session::new((1..=n).map(|id| question(id, 1)).collect())
    }

    #[test]
    fn correct_answer_gives_positive_feedback() {
        let mut session = session(3);
        let feedback = session.select_answer(3, 1).unwrap();
        assert!(feedback.is_correct);
        assert_eq!(feedback.explanation, "explanation 3");
    }

    #[test]
    fn incorrect_answer_gives_negative_feedback() {
        let mut session = session(3);
        let feedback = session.select_answer(1, 0).unwrap();
        assert!(!feedback.is_correct);
    }

    #[test]
    fn first_answer_is_final() {
        let mut session = session(3);
        session.select_answer(3, 1).unwrap();

        let feedback = session.select_answer(3, 2).unwrap();
        assert_eq!(session.answer_for(3), Some(1));
        assert!(feedback.is_correct, "repeat select must report the stored answer");
    }

    #[test]
    fn unknown_question_id_is_rejected() {
        let mut session = session(3);
        assert_eq!(
            session.select_answer(99, 0),
            Err(SessionError::InvalidQuestionId(99))
        );
        assert_eq!(session.answered_count(), 0);
    }

    #[test]
    fn out_of_range_option_is_rejected() {
        let mut session = session(3);
        assert_eq!(
            session.select_answer(2, 3),
            Err(SessionError::InvalidOptionIndex {
                question_id: 2,
                index: 3,
                count: 3
            })
        );
        assert!(!session.is_answered(2));
    }

    #[test]
    fn feedback_is_recoverable_after_answering() {
        let mut session = session(3);
        assert_eq!(session.feedback_for(1), None);

        let at_answer = session.select_answer(1, 2).unwrap();
        assert_eq!(session.feedback_for(1), Some(at_answer));
        assert_eq!(session.feedback_for(99), None);
    }

    #[test]
    fn navigation_stops_at_boundaries() {
        let mut session = session(3);

        session.previous();
        assert_eq!(session.current_index(), 0);

        session.next();
        session.next();
        assert_eq!(session.current_index(), 2);
        session.next();
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn navigation_hides_explanation() {
        let mut session = session(3);
        session.toggle_explanation();
        assert!(session.explanation_visible());

        session.next();
        assert!(!session.explanation_visible());

        session.toggle_explanation();
        session.previous();
        assert!(!session.explanation_visible());
    }

    #[test]
    fn toggle_explanation_flips() {
        let mut session = session(1);
        assert!(!session.explanation_visible());
        session.toggle_explanation();
        assert!(session.explanation_visible());
        session.toggle_explanation();
        assert!(!session.explanation_visible());
    }

    #[test]
    fn is_complete_requires_every_answer() {
        let mut session = session(3);
        assert!(!session.is_complete());

        session.select_answer(1, 0).unwrap();
        assert!(!session.is_complete());
        session.select_answer(3, 0).unwrap();
        assert!(!session.is_complete());
        session.select_answer(2, 0).unwrap();
        assert!(session.is_complete());
    }

    #[test]
    fn submit_rejects_every_partial_configuration() {
        // All strict subsets of {1, 2} for a two-question session.
        for answered in [vec![], vec![1], vec![2]] {
            let mut session = session(2);
            for id in &answered {
                session.select_answer(*id, 0).unwrap();
            }
            assert_eq!(
                session.submit(),
                Err(SessionError::IncompleteSession {
                    answered: answered.len(),
                    total: 2
                })
            );
            assert!(!session.is_completed());
        }
    }

    #[test]
    fn submit_scores_and_seals() {
        let mut session = session(2);
        session.select_answer(1, 1).unwrap();
        session.select_answer(2, 0).unwrap();

        let report = session.submit().unwrap();
        assert_eq!(
            report,
            SessionReport {
                score: 1,
                total_questions: 2
            }
        );
        assert!(session.is_completed());

        assert_eq!(session.submit(), Err(SessionError::AlreadyCompleted));
    }

    #[test]
    fn score_counts_matching_answers() {
        let mut session = session(4);
        session.select_answer(1, 1).unwrap();
        session.select_answer(2, 1).unwrap();
        session.select_answer(3, 0).unwrap();
        session.select_answer(4, 2).unwrap();

        let report = session.submit().unwrap();
        assert_eq!(report.score, 2);
        assert!(report.score <= report.total_questions);
    }

    #[test]
    fn answers_are_sealed_after_submit() {
        let mut session = session(1);
        session.select_answer(1, 1).unwrap();
        session.submit().unwrap();

        assert_eq!(
            session.select_answer(1, 0),
            Err(SessionError::AlreadyCompleted)
        );
        assert_eq!(session.answer_for(1), Some(1));
    }

    #[test]
    fn percentage_rounds() {
        let report = SessionReport {
            score: 7,
            total_questions: 10,
        };
        assert_eq!(report.percentage(), 70);

        let report = SessionReport {
            score: 2,
            total_questions: 3,
        };
        assert_eq!(report.percentage(), 67);
    }
}
