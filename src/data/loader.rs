use std::fs;
use std::path::Path;

use tracing::{debug, error, info};

use crate::error::{IntegrityViolation, QuizError, Result};
use crate::models::{Question, RawQuestion};

use super::builtin;

/// Validate the embedded question table.
pub fn load_builtin_questions() -> Result<Vec<Question>> {
    let questions = validate_all(builtin::QUESTIONS.iter().map(builtin::Entry::to_raw))?;
    debug!(count = questions.len(), "validated built-in questions");
    Ok(questions)
}

/// Load and validate questions from a JSON file.
pub fn load_questions_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Question>> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).inspect_err(|err| {
        error!(path = %path.display(), error = %err, "failed to read question file");
    })?;

    let questions = load_questions_from_str(&json_content)?;
    info!(
        path = %path.display(),
        count = questions.len(),
        "loaded questions from file"
    );
    Ok(questions)
}

/// Parse and validate questions from a JSON document.
pub fn load_questions_from_str(json: &str) -> Result<Vec<Question>> {
    let records = parse_records(json)?;
    validate_all(records)
}

/// Parse the outer array loosely so that a record with a missing field is
/// reported against its index instead of as a bare parse error.
fn parse_records(json: &str) -> Result<Vec<RawQuestion>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json)?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            if let Some(field) = missing_field(&value) {
                return Err(QuizError::integrity(
                    index,
                    IntegrityViolation::MissingField(field.to_string()),
                ));
            }
            serde_json::from_value(value).map_err(QuizError::from)
        })
        .collect()
}

const REQUIRED_FIELDS: [&str; 4] = ["category", "q", "options", "answer"];

/// A required field that is absent or explicitly `null`.
fn missing_field(value: &serde_json::Value) -> Option<&'static str> {
    let object = value.as_object()?;
    REQUIRED_FIELDS
        .into_iter()
        .find(|field| object.get(*field).is_none_or(serde_json::Value::is_null))
}

fn validate_all<I>(records: I) -> Result<Vec<Question>>
where
    I: IntoIterator<Item = RawQuestion>,
{
    let questions = records
        .into_iter()
        .enumerate()
        .map(|(index, raw)| Question::validate(index, raw))
        .collect::<Result<Vec<_>>>()
        .inspect_err(|err| error!(error = %err, "rejected question set"))?;

    if questions.is_empty() {
        error!("question set is empty");
        return Err(QuizError::EmptySet);
    }

    Ok(questions)
}
