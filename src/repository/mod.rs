use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::question::{NewQuestion, Question};
use crate::domain::types::{CategoryId, QuestionId};
use crate::pagination::Pagination;

pub mod category;
pub mod errors;
pub mod question;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing or searching questions.
///
/// Results are always ordered by question id.
#[derive(Debug, Clone, Default)]
pub struct QuestionListQuery {
    /// Restrict to a single category.
    pub category: Option<CategoryId>,
    /// Case-insensitive substring of the question text.
    pub search: Option<String>,
    /// Question ids to leave out of the result.
    pub exclude: Vec<QuestionId>,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl QuestionListQuery {
    pub fn category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
    pub fn exclude(mut self, ids: impl IntoIterator<Item = QuestionId>) -> Self {
        self.exclude.extend(ids);
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read-only operations for question entities.
pub trait QuestionReader {
    /// List questions matching the query, returning the unpaginated total
    /// alongside the requested window.
    fn list_questions(&self, query: QuestionListQuery)
    -> RepositoryResult<(usize, Vec<Question>)>;
    /// Retrieve a question by its identifier.
    fn get_question_by_id(&self, id: QuestionId) -> RepositoryResult<Option<Question>>;
}

/// Write operations for question entities.
pub trait QuestionWriter {
    /// Persist a new question and return it with its generated id.
    fn create_question(&self, question: &NewQuestion) -> RepositoryResult<Question>;
    /// Delete a question by id, returning the number of removed rows.
    fn delete_question(&self, id: QuestionId) -> RepositoryResult<usize>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List every category ordered by its type label.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}
