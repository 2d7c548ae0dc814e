mod question;

pub use question::{Category, NUM_OPTIONS, Question, RawQuestion};
