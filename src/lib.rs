//! # scripture-quiz
//!
//! A fixed set of multiple-choice Bible trivia questions, validated once
//! and served read-only to whatever front-end runs the quiz.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use scripture_quiz::{QuestionRepository, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Validate the embedded question table
//!     let repository = QuestionRepository::load_all()?;
//!
//!     // Draw a reproducible round of five questions
//!     let mut rng = StdRng::seed_from_u64(42);
//!     for question in repository.random_sample(5, &mut rng)? {
//!         println!("{} ({})", question.text(), question.reference());
//!     }
//!
//!     Ok(())
//! }
//! ```

mod data;
mod error;
mod models;
mod repository;

pub use data::{load_builtin_questions, load_questions_from_path, load_questions_from_str};
pub use error::{IntegrityViolation, QuizError, Result};
pub use models::{Category, NUM_OPTIONS, Question, RawQuestion};
pub use repository::QuestionRepository;
