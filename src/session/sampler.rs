use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::QuestionRecord;

/// A bank question prepared for one session: options shuffled and the
/// correct index remapped to keep pointing at the correct option text.
///
/// The correct index never leaves this module tree; the rendering layer
/// learns correctness only through [`AnswerFeedback`](super::AnswerFeedback).
#[derive(Clone, Debug)]
pub struct SessionQuestion {
    id: u32,
    text: String,
    options: Vec<String>,
    correct_option: usize,
    explanation: String,
}

impl SessionQuestion {
    pub(super) fn new(
        id: u32,
        text: String,
        options: Vec<String>,
        correct_option: usize,
        explanation: String,
    ) -> Self {
        Self {
            id,
            text,
            options,
            correct_option,
            explanation,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub(super) fn correct_option(&self) -> usize {
        self.correct_option
    }
}

/// Error starting a session draw.
#[derive(Debug, PartialEq, Eq)]
pub enum SampleError {
    /// The bank has no questions to draw from.
    EmptyBank,
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::EmptyBank => write!(f, "question bank is empty"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Draw up to `n` questions from the bank in random order, with each
/// question's options independently shuffled.
///
/// Returns fewer than `n` questions when the bank is smaller than the
/// request. Selection and per-question option shuffles are independent
/// draws from `rng`.
pub fn sample<R: Rng>(
    bank: &[QuestionRecord],
    n: usize,
    rng: &mut R,
) -> Result<Vec<SessionQuestion>, SampleError> {
    if bank.is_empty() {
        return Err(SampleError::EmptyBank);
    }

    let mut indices: Vec<usize> = (0..bank.len()).collect();
    indices.shuffle(rng);
    indices.truncate(n.min(bank.len()));

    Ok(indices
        .into_iter()
        .map(|i| shuffle_options(&bank[i], rng))
        .collect())
}

fn shuffle_options<R: Rng>(record: &QuestionRecord, rng: &mut R) -> SessionQuestion {
    let mut order: Vec<usize> = (0..record.options.len()).collect();
    order.shuffle(rng);

    let options = order.iter().map(|&i| record.options[i].clone()).collect();
    let correct_option = order
        .iter()
        .position(|&i| i == record.correct_answer)
        .expect("option order is a permutation");

    SessionQuestion::new(
        record.id,
        record.text.clone(),
        options,
        correct_option,
        record.explanation.clone(),
    )
}
