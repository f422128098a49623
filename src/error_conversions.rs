//! Conversions from form errors into service errors.

use crate::forms::questions::{CreateQuestionFormError, SearchQuestionsFormError};
use crate::forms::quizzes::QuizFormError;
use crate::services::ServiceError;

impl From<CreateQuestionFormError> for ServiceError {
    fn from(val: CreateQuestionFormError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<SearchQuestionsFormError> for ServiceError {
    fn from(val: SearchQuestionsFormError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<QuizFormError> for ServiceError {
    fn from(val: QuizFormError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}
