use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{IntegrityViolation, QuizError};

pub const NUM_OPTIONS: usize = 4;

/// Topic label a question is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    People,
    Events,
    Places,
    Scripture,
    Teachings,
    Miracles,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::People,
        Category::Events,
        Category::Places,
        Category::Scripture,
        Category::Teachings,
        Category::Miracles,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::People => "People",
            Category::Events => "Events",
            Category::Places => "Places",
            Category::Scripture => "Scripture",
            Category::Teachings => "Teachings",
            Category::Miracles => "Miracles",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = IntegrityViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| IntegrityViolation::UnknownCategory(s.to_string()))
    }
}

/// A validated multiple-choice question.
///
/// Instances only exist once every field has passed the checks in
/// [`Question::validate`], so `answer_index` always points into `options`.
///
/// Serializes to the same field names as [`RawQuestion`], so a dumped set
/// can be loaded back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    category: Category,
    #[serde(rename = "q")]
    text: String,
    options: [String; NUM_OPTIONS],
    #[serde(rename = "answer")]
    answer_index: usize,
    #[serde(rename = "ref")]
    reference: String,
}

impl Question {
    /// Validate a record and build a question from it.
    ///
    /// `index` is the record's position in its source and is reported in
    /// the error when a check fails.
    pub fn validate(index: usize, raw: RawQuestion) -> Result<Self, QuizError> {
        let fail = |violation| QuizError::integrity(index, violation);

        let category: Category = raw.category.parse().map_err(fail)?;

        if raw.q.trim().is_empty() {
            return Err(fail(IntegrityViolation::EmptyText));
        }

        let option_count = raw.options.len();
        let options: [String; NUM_OPTIONS] = raw
            .options
            .try_into()
            .map_err(|_| fail(IntegrityViolation::OptionCount(option_count)))?;

        let mut seen = HashSet::with_capacity(NUM_OPTIONS);
        for (i, option) in options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(fail(IntegrityViolation::EmptyOption(i)));
            }
            if !seen.insert(option.as_str()) {
                return Err(fail(IntegrityViolation::DuplicateOption(option.clone())));
            }
        }

        let answer_index = usize::try_from(raw.answer)
            .ok()
            .filter(|&i| i < NUM_OPTIONS)
            .ok_or_else(|| {
                fail(IntegrityViolation::AnswerOutOfRange {
                    answer: raw.answer,
                    options: NUM_OPTIONS,
                })
            })?;

        Ok(Self {
            category,
            text: raw.q,
            options,
            answer_index,
            reference: raw.reference,
        })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String; NUM_OPTIONS] {
        &self.options
    }

    pub fn answer_index(&self) -> usize {
        self.answer_index
    }

    /// Citation for the answer. May be empty.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.answer_index]
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.answer_index
    }
}

/// A question record as written in a data file, before validation.
///
/// Field names follow the on-disk schema:
/// `{ "category", "q", "options", "answer", "ref" }`. `answer` is signed so
/// a negative index is reported as out of range rather than as a type error.
#[derive(Debug, Clone, Deserialize)]
pub struct RawQuestion {
    pub category: String,
    pub q: String,
    pub options: Vec<String>,
    pub answer: i64,
    #[serde(rename = "ref", default)]
    pub reference: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(options: &[&str], answer: i64) -> RawQuestion {
        RawQuestion {
            category: "Places".to_string(),
            q: "Where was Jesus born?".to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer,
            reference: "Matthew 2:1".to_string(),
        }
    }

    fn violation(result: Result<Question, QuizError>) -> IntegrityViolation {
        match result {
            Err(QuizError::DataIntegrity { violation, .. }) => violation,
            other => panic!("expected integrity error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_question() {
        let question = Question::validate(
            0,
            raw(&["Nazareth", "Jerusalem", "Bethlehem", "Capernaum"], 2),
        )
        .unwrap();

        assert_eq!(question.category(), Category::Places);
        assert_eq!(question.correct_option(), "Bethlehem");
        assert!(question.is_correct(2));
        assert!(!question.is_correct(0));
        assert_eq!(question.reference(), "Matthew 2:1");
    }

    #[test]
    fn test_wrong_option_count() {
        let result = Question::validate(4, raw(&["A", "B", "C"], 0));
        match result {
            Err(QuizError::DataIntegrity { index, violation }) => {
                assert_eq!(index, 4);
                assert_eq!(violation, IntegrityViolation::OptionCount(3));
            }
            other => panic!("expected integrity error, got {:?}", other),
        }

        let result = Question::validate(0, raw(&["A", "B", "C", "D", "E"], 0));
        assert_eq!(violation(result), IntegrityViolation::OptionCount(5));
    }

    #[test]
    fn test_answer_out_of_range() {
        let result = Question::validate(0, raw(&["A", "B", "C", "D"], 4));
        assert_eq!(
            violation(result),
            IntegrityViolation::AnswerOutOfRange {
                answer: 4,
                options: 4
            }
        );

        let result = Question::validate(0, raw(&["A", "B", "C", "D"], -1));
        assert_eq!(
            violation(result),
            IntegrityViolation::AnswerOutOfRange {
                answer: -1,
                options: 4
            }
        );
    }

    #[test]
    fn test_duplicate_and_empty_options() {
        let result = Question::validate(0, raw(&["A", "B", "A", "D"], 0));
        assert_eq!(
            violation(result),
            IntegrityViolation::DuplicateOption("A".to_string())
        );

        let result = Question::validate(0, raw(&["A", "  ", "C", "D"], 0));
        assert_eq!(violation(result), IntegrityViolation::EmptyOption(1));
    }

    #[test]
    fn test_empty_text_and_unknown_category() {
        let mut record = raw(&["A", "B", "C", "D"], 0);
        record.q = "   ".to_string();
        assert_eq!(
            violation(Question::validate(0, record)),
            IntegrityViolation::EmptyText
        );

        let mut record = raw(&["A", "B", "C", "D"], 0);
        record.category = "Sports".to_string();
        assert_eq!(
            violation(Question::validate(0, record)),
            IntegrityViolation::UnknownCategory("Sports".to_string())
        );
    }

    #[test]
    fn test_category_round_trip_labels() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert!("people".parse::<Category>().is_err());
    }
}
