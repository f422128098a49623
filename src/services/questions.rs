use crate::domain::category::Category;
use crate::domain::question::Question;
use crate::domain::types::QuestionId;
use crate::forms::questions::{
    CreateQuestionForm, CreateQuestionFormPayload, SearchQuestionsForm,
    SearchQuestionsFormPayload,
};
use crate::repository::{CategoryReader, QuestionListQuery, QuestionReader, QuestionWriter};

use super::{ServiceError, ServiceResult, page_number};

/// A window of questions together with the unpaginated total.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: Vec<Category>,
}

/// Outcome of a successful delete.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletedQuestion {
    pub deleted: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Questions ordered by id, sliced into pages of `per_page`.
///
/// A page with no questions, including any page past the last one, is
/// reported as [`ServiceError::NotFound`].
pub fn list_questions<R>(page: i64, per_page: usize, repo: &R) -> ServiceResult<QuestionPage>
where
    R: QuestionReader + CategoryReader,
{
    let page = page_number(page, per_page)?;

    let (total_questions, questions) =
        match repo.list_questions(QuestionListQuery::default().paginate(page, per_page)) {
            Ok(result) => result,
            Err(e) => return Err(ServiceError::from_repository("Failed to list questions", e)),
        };

    if questions.is_empty() {
        return Err(ServiceError::NotFound);
    }

    let categories = repo
        .list_categories()
        .map_err(|e| ServiceError::from_repository("Failed to list categories", e))?;

    Ok(QuestionPage {
        questions,
        total_questions,
        categories,
    })
}

/// Delete a question and return the requested page of what remains.
pub fn delete_question<R>(
    question_id: i32,
    page: i64,
    per_page: usize,
    repo: &R,
) -> ServiceResult<DeletedQuestion>
where
    R: QuestionReader + QuestionWriter,
{
    let question_id = QuestionId::new(question_id).map_err(|_| ServiceError::NotFound)?;
    let page = page_number(page, per_page)?;

    match repo.get_question_by_id(question_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => return Err(ServiceError::from_repository("Failed to get question", e)),
    }

    match repo.delete_question(question_id) {
        Ok(0) => return Err(ServiceError::NotFound),
        Ok(_) => log::info!("Deleted question {question_id}"),
        Err(e) => return Err(ServiceError::from_repository("Failed to delete question", e)),
    }

    let (total_questions, questions) =
        match repo.list_questions(QuestionListQuery::default().paginate(page, per_page)) {
            Ok(result) => result,
            Err(e) => {
                return Err(ServiceError::from_repository(
                    "Failed to list remaining questions",
                    e,
                ));
            }
        };

    Ok(DeletedQuestion {
        deleted: question_id,
        questions,
        total_questions,
    })
}

/// Validate and persist a new question.
pub fn create_question<R>(form: CreateQuestionForm, repo: &R) -> ServiceResult<Question>
where
    R: QuestionWriter,
{
    let payload: CreateQuestionFormPayload = form.try_into()?;

    match repo.create_question(&payload.into_new_question()) {
        Ok(question) => {
            log::info!("Created question {}", question.id);
            Ok(question)
        }
        Err(e) => Err(ServiceError::from_repository("Failed to create question", e)),
    }
}

/// Every question whose text contains the search term, ignoring case.
pub fn search_questions<R>(form: SearchQuestionsForm, repo: &R) -> ServiceResult<Vec<Question>>
where
    R: QuestionReader,
{
    let payload: SearchQuestionsFormPayload = form.try_into()?;

    match repo.list_questions(QuestionListQuery::default().search(payload.term)) {
        Ok((_total, questions)) => Ok(questions),
        Err(e) => Err(ServiceError::from_repository("Failed to search questions", e)),
    }
}
