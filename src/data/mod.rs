mod builtin;
mod loader;

pub use loader::{load_builtin_questions, load_questions_from_path, load_questions_from_str};
