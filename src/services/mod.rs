pub use errors::{ServiceError, ServiceResult};

pub mod categories;
pub mod errors;
pub mod questions;
pub mod quizzes;

/// Converts a 1-based page number from a query string, rejecting pages
/// below one and pages whose offset would not fit in an SQL `OFFSET`.
pub(crate) fn page_number(page: i64, per_page: usize) -> ServiceResult<usize> {
    if page < 1 {
        return Err(ServiceError::NotFound);
    }
    let per_page = i64::try_from(per_page).map_err(|_| ServiceError::NotFound)?;
    if (page - 1).checked_mul(per_page).is_none() {
        return Err(ServiceError::NotFound);
    }
    usize::try_from(page).map_err(|_| ServiceError::NotFound)
}
