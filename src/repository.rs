//! Read-only access to a validated question set.

use std::path::Path;

use once_cell::sync::OnceCell;
use rand::Rng;
use tracing::{debug, info};

use crate::data::{load_builtin_questions, load_questions_from_path, load_questions_from_str};
use crate::error::{QuizError, Result};
use crate::models::{Category, Question};

static BUILTIN: OnceCell<QuestionRepository> = OnceCell::new();

/// An immutable, ordered collection of questions.
///
/// A repository is never empty and every question in it has passed
/// validation. Nothing can be added or removed once it is built, so a
/// shared reference can be handed to any number of readers.
#[derive(Debug, Clone)]
pub struct QuestionRepository {
    questions: Vec<Question>,
}

impl QuestionRepository {
    /// The embedded question set, validated on first access.
    ///
    /// Every call returns the same instance. A corrupt table is reported as
    /// [`QuizError::DataIntegrity`] and should be treated as fatal.
    pub fn load_all() -> Result<&'static QuestionRepository> {
        BUILTIN.get_or_try_init(|| {
            let repository = Self::from_questions(load_builtin_questions()?)?;
            info!(count = repository.len(), "built-in question set loaded");
            Ok(repository)
        })
    }

    pub fn from_questions(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(QuizError::EmptySet);
        }
        Ok(Self { questions })
    }

    /// Load a question set from a JSON file.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_questions(load_questions_from_path(path)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_questions(load_questions_from_str(json)?)
    }

    /// All questions in source order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions whose category label equals `category`, in source order.
    ///
    /// An unknown label yields an empty list.
    pub fn by_category(&self, category: &str) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.category().as_str() == category)
            .collect()
    }

    /// Distinct categories in the order they first appear.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for question in &self.questions {
            if !categories.contains(&question.category()) {
                categories.push(question.category());
            }
        }
        categories
    }

    pub fn count_by_category(&self) -> Vec<(Category, usize)> {
        self.categories()
            .into_iter()
            .map(|category| {
                let count = self
                    .questions
                    .iter()
                    .filter(|q| q.category() == category)
                    .count();
                (category, count)
            })
            .collect()
    }

    /// Draw `n` distinct questions without replacement.
    ///
    /// The result depends only on the state of `rng`, so a seeded generator
    /// reproduces the same questions in the same order.
    pub fn random_sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<&Question>> {
        let pool: Vec<&Question> = self.questions.iter().collect();
        sample_from(pool, n, rng, None)
    }

    /// Like [`random_sample`](Self::random_sample), restricted to one category.
    pub fn random_sample_in<R: Rng + ?Sized>(
        &self,
        category: &str,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<&Question>> {
        sample_from(self.by_category(category), n, rng, Some(category))
    }
}

fn sample_from<'a, R: Rng + ?Sized>(
    pool: Vec<&'a Question>,
    n: usize,
    rng: &mut R,
    category: Option<&str>,
) -> Result<Vec<&'a Question>> {
    if n > pool.len() {
        return Err(QuizError::InsufficientData {
            requested: n,
            available: pool.len(),
            category: category.map(str::to_string),
        });
    }

    let picked: Vec<&Question> = rand::seq::index::sample(rng, pool.len(), n)
        .into_iter()
        .map(|i| pool[i])
        .collect();
    debug!(requested = n, pool = pool.len(), ?category, "sampled questions");
    Ok(picked)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn repo() -> &'static QuestionRepository {
        QuestionRepository::load_all().unwrap()
    }

    #[test]
    fn test_every_question_has_valid_shape() {
        for question in repo().questions() {
            assert_eq!(question.options().len(), 4);
            assert!(question.answer_index() < 4);
        }
    }

    #[test]
    fn test_load_all_is_idempotent() {
        let first = QuestionRepository::load_all().unwrap();
        let second = QuestionRepository::load_all().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), 30);
        assert!(!first.is_empty());
        assert_eq!(first.questions(), second.questions());
    }

    #[test]
    fn test_by_category_preserves_order() {
        let people = repo().by_category("People");
        assert!(!people.is_empty());
        assert!(people.iter().all(|q| q.category() == Category::People));

        let expected: Vec<&Question> = repo()
            .questions()
            .iter()
            .filter(|q| q.category() == Category::People)
            .collect();
        assert_eq!(people, expected);
    }

    #[test]
    fn test_by_unknown_category_is_empty() {
        assert!(repo().by_category("Nonexistent").is_empty());
        assert!(repo().by_category("places").is_empty());
    }

    #[test]
    fn test_places_starts_with_bethlehem() {
        let places = repo().by_category("Places");
        assert_eq!(places.len(), 5);
        assert_eq!(places[0].answer_index(), 2);
        assert_eq!(places[0].correct_option(), "Bethlehem");
    }

    #[test]
    fn test_categories_in_source_order() {
        assert_eq!(repo().categories(), Category::ALL.to_vec());
        assert!(repo().count_by_category().iter().all(|(_, n)| *n == 5));
    }

    #[test]
    fn test_sample_is_reproducible() {
        let first = repo()
            .random_sample(5, &mut StdRng::seed_from_u64(42))
            .unwrap();
        let second = repo()
            .random_sample(5, &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sample_differs_across_seeds() {
        let first = repo()
            .random_sample(5, &mut StdRng::seed_from_u64(1))
            .unwrap();
        let second = repo()
            .random_sample(5, &mut StdRng::seed_from_u64(2))
            .unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_sample_has_no_duplicates() {
        let all = repo()
            .random_sample(repo().len(), &mut StdRng::seed_from_u64(7))
            .unwrap();
        let distinct: HashSet<&str> = all.iter().map(|q| q.text()).collect();
        assert_eq!(distinct.len(), repo().len());
    }

    #[test]
    fn test_oversized_sample_fails() {
        let result = repo().random_sample(repo().len() + 1, &mut StdRng::seed_from_u64(42));
        match result {
            Err(QuizError::InsufficientData {
                requested,
                available,
                category,
            }) => {
                assert_eq!(requested, 31);
                assert_eq!(available, 30);
                assert_eq!(category, None);
            }
            other => panic!("expected insufficient data, got {:?}", other),
        }
    }

    #[test]
    fn test_category_sample() {
        let miracles = repo()
            .random_sample_in("Miracles", 3, &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(miracles.len(), 3);
        assert!(miracles.iter().all(|q| q.category() == Category::Miracles));

        let result = repo().random_sample_in("Miracles", 6, &mut StdRng::seed_from_u64(3));
        assert!(matches!(
            result,
            Err(QuizError::InsufficientData { available: 5, .. })
        ));

        let result = repo().random_sample_in("Nonexistent", 1, &mut StdRng::seed_from_u64(3));
        assert!(matches!(
            result,
            Err(QuizError::InsufficientData { available: 0, .. })
        ));
    }

    #[test]
    fn test_repository_from_json() {
        let json = r#"[
            { "category": "Miracles", "q": "On what did Jesus walk during a storm?",
              "options": ["Fire", "Sand", "Water", "Clouds"], "answer": 2, "ref": "Matthew 14:25" }
        ]"#;
        let repository = QuestionRepository::from_json_str(json).unwrap();
        assert_eq!(repository.len(), 1);
        assert_eq!(repository.categories(), vec![Category::Miracles]);
        assert!(repository.by_category("People").is_empty());
        assert!(repository.random_sample(2, &mut StdRng::seed_from_u64(1)).is_err());
    }

    #[test]
    fn test_empty_repository_rejected() {
        let result = QuestionRepository::from_questions(Vec::new());
        assert!(matches!(result, Err(QuizError::EmptySet)));
        assert_eq!(
            result.unwrap_err().to_string(),
            "data integrity error: question set is empty"
        );
    }
}
