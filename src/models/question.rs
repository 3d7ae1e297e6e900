use serde::Deserialize;

/// A question as stored in the bank file.
///
/// Immutable at runtime; the session layer derives its own shuffled
/// copies and never writes back.
#[derive(Clone, Debug, Deserialize)]
pub struct QuestionRecord {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
}
