use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::models::QuestionRecord;

/// Error loading or validating a question bank.
#[derive(Debug)]
pub enum LoadError {
    /// The bank file could not be read.
    Io(io::Error),
    /// The bank file is not valid JSON.
    Parse(serde_json::Error),
    /// Two bank entries share the same id.
    DuplicateId(u32),
    /// A question has fewer than two options.
    TooFewOptions { id: u32, count: usize },
    /// A question's correct-answer index is outside its options.
    CorrectAnswerOutOfRange { id: u32, index: usize, count: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read question bank: {}", e),
            LoadError::Parse(e) => write!(f, "failed to parse question bank: {}", e),
            LoadError::DuplicateId(id) => {
                write!(f, "question id {} appears more than once in the bank", id)
            }
            LoadError::TooFewOptions { id, count } => {
                write!(f, "question {} has {} options, need at least 2", id, count)
            }
            LoadError::CorrectAnswerOutOfRange { id, index, count } => write!(
                f,
                "question {} marks option {} correct but only has {} options",
                id, index, count
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

/// Load and validate a question bank from a JSON file.
pub fn load_bank_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<QuestionRecord>, LoadError> {
    let json = fs::read_to_string(path)?;
    parse_bank(&json)
}

/// Parse and validate a question bank from a JSON string.
///
/// A bank passes only if ids are unique, every question has at least
/// two options, and every correct-answer index is in range.
pub fn parse_bank(json: &str) -> Result<Vec<QuestionRecord>, LoadError> {
    let bank: Vec<QuestionRecord> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for question in &bank {
        if !seen.insert(question.id) {
            return Err(LoadError::DuplicateId(question.id));
        }
        if question.options.len() < 2 {
            return Err(LoadError::TooFewOptions {
                id: question.id,
                count: question.options.len(),
            });
        }
        if question.correct_answer >= question.options.len() {
            return Err(LoadError::CorrectAnswerOutOfRange {
                id: question.id,
                index: question.correct_answer,
                count: question.options.len(),
            });
        }
    }

    Ok(bank)
}
