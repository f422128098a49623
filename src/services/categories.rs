use crate::domain::category::Category;
use crate::domain::question::Question;
use crate::domain::types::CategoryId;
use crate::repository::{CategoryReader, QuestionListQuery, QuestionReader};

use super::{ServiceError, ServiceResult, page_number};

/// Every category, ordered by its type label.
pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader,
{
    repo.list_categories()
        .map_err(|e| ServiceError::from_repository("Failed to list categories", e))
}

/// One page of the questions filed under `category_id`.
///
/// Unknown categories are reported as [`ServiceError::NotFound`]; a page past
/// the end of a known category is simply empty.
pub fn list_category_questions<R>(
    category_id: i32,
    page: i64,
    per_page: usize,
    repo: &R,
) -> ServiceResult<Vec<Question>>
where
    R: CategoryReader + QuestionReader,
{
    let category_id = CategoryId::new(category_id).map_err(|_| ServiceError::NotFound)?;
    let page = page_number(page, per_page)?;

    match repo.get_category_by_id(category_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => return Err(ServiceError::from_repository("Failed to get category", e)),
    }

    let query = QuestionListQuery::default()
        .category(category_id)
        .paginate(page, per_page);

    match repo.list_questions(query) {
        Ok((_total, questions)) => Ok(questions),
        Err(e) => Err(ServiceError::from_repository(
            "Failed to list category questions",
            e,
        )),
    }
}
