//! Error types for question loading and sampling.

use std::io;

use thiserror::Error;

use crate::models::NUM_OPTIONS;

/// Rule broken by a question record at the load boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityViolation {
    /// The record does not carry exactly four options.
    #[error("expected {expected} options, found {0}", expected = NUM_OPTIONS)]
    OptionCount(usize),
    /// The answer index does not point into the options.
    #[error("answer index {answer} is outside 0..{options}")]
    AnswerOutOfRange { answer: i64, options: usize },
    /// The question text is blank.
    #[error("question text is empty")]
    EmptyText,
    /// The option at this position is blank.
    #[error("option {0} is empty")]
    EmptyOption(usize),
    /// The same option text appears twice.
    #[error("option \"{0}\" appears more than once")]
    DuplicateOption(String),
    /// The category label is not one of the known topics.
    #[error("unknown category \"{0}\"")]
    UnknownCategory(String),
    /// A required field is absent or null in the source record.
    #[error("missing required field `{0}`")]
    MissingField(String),
}

/// Error type for quiz data operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A record failed shape validation. Fatal: the set cannot be used.
    #[error("data integrity error in question {index}: {violation}")]
    DataIntegrity {
        index: usize,
        violation: IntegrityViolation,
    },

    /// The source holds no questions at all. Fatal like `DataIntegrity`.
    #[error("data integrity error: question set is empty")]
    EmptySet,

    /// A sample asked for more questions than the pool holds.
    #[error("{}", insufficient_message(.requested, .available, .category))]
    InsufficientData {
        requested: usize,
        available: usize,
        category: Option<String>,
    },

    /// The question file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The question file is not valid JSON for the schema.
    #[error("failed to parse questions: {0}")]
    Parse(#[from] serde_json::Error),
}

impl QuizError {
    pub(crate) fn integrity(index: usize, violation: IntegrityViolation) -> Self {
        QuizError::DataIntegrity { index, violation }
    }

    /// True for errors the caller can recover from by changing the request.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, QuizError::InsufficientData { .. })
    }
}

fn insufficient_message(
    requested: &usize,
    available: &usize,
    category: &Option<String>,
) -> String {
    match category {
        Some(category) => format!(
            "requested {} questions but only {} available in category \"{}\"",
            requested, available, category
        ),
        None => format!(
            "requested {} questions but only {} available",
            requested, available
        ),
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;
