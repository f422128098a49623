use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::question::NewQuestion;
use crate::domain::types::{AnswerText, CategoryId, Difficulty, QuestionText, TypeConstraintError};
use crate::forms::deserialize_lenient_i32;

/// Body of `POST /questions`.
///
/// Every field is optional at the serde level so that a missing field is
/// reported as a validation failure rather than a malformed body.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionForm {
    #[validate(required)]
    pub question: Option<String>,
    #[validate(required)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_i32")]
    #[validate(required)]
    pub category: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_lenient_i32")]
    #[validate(required)]
    pub difficulty: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateQuestionFormPayload {
    pub question: QuestionText,
    pub answer: AnswerText,
    pub category: CategoryId,
    pub difficulty: Difficulty,
}

impl CreateQuestionFormPayload {
    pub fn into_new_question(self) -> NewQuestion {
        NewQuestion {
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[derive(Debug, Error)]
pub enum CreateQuestionFormError {
    #[error("Create question form validation failed: {0}")]
    Validation(String),
    #[error("Create question form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CreateQuestionFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CreateQuestionFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CreateQuestionForm> for CreateQuestionFormPayload {
    type Error = CreateQuestionFormError;

    fn try_from(value: CreateQuestionForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let (Some(question), Some(answer), Some(category), Some(difficulty)) = (
            value.question,
            value.answer,
            value.category,
            value.difficulty,
        ) else {
            return Err(CreateQuestionFormError::Validation(
                "all of question, answer, category and difficulty are required".to_string(),
            ));
        };

        Ok(Self {
            question: QuestionText::new(question)?,
            answer: AnswerText::new(answer)?,
            category: CategoryId::new(category)?,
            difficulty: Difficulty::new(difficulty)?,
        })
    }
}

/// Body of `POST /questions/search_results`.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchQuestionsForm {
    #[serde(rename = "searchTerm")]
    #[validate(required)]
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuestionsFormPayload {
    /// Raw search term; an empty term matches every question.
    pub term: String,
}

#[derive(Debug, Error)]
pub enum SearchQuestionsFormError {
    #[error("Search form validation failed: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for SearchQuestionsFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<SearchQuestionsForm> for SearchQuestionsFormPayload {
    type Error = SearchQuestionsFormError;

    fn try_from(value: SearchQuestionsForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let term = value.search_term.ok_or_else(|| {
            SearchQuestionsFormError::Validation("searchTerm is required".to_string())
        })?;
        Ok(Self { term })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> CreateQuestionForm {
        CreateQuestionForm {
            question: Some(" How many miles away from earth is the moon? ".to_string()),
            answer: Some("238,900".to_string()),
            category: Some(1),
            difficulty: Some(5),
        }
    }

    #[test]
    fn create_question_form_builds_payload() {
        let payload: CreateQuestionFormPayload = full_form().try_into().unwrap();
        assert_eq!(
            payload.question.as_str(),
            "How many miles away from earth is the moon?"
        );
        assert_eq!(payload.category.get(), 1);
        assert_eq!(payload.difficulty.get(), 5);
    }

    #[test]
    fn create_question_form_requires_answer() {
        let form = CreateQuestionForm {
            answer: None,
            ..full_form()
        };
        let err = CreateQuestionFormPayload::try_from(form).unwrap_err();
        assert!(matches!(err, CreateQuestionFormError::Validation(_)));
    }

    #[test]
    fn create_question_form_rejects_out_of_range_difficulty() {
        let form = CreateQuestionForm {
            difficulty: Some(9),
            ..full_form()
        };
        let err = CreateQuestionFormPayload::try_from(form).unwrap_err();
        assert!(matches!(err, CreateQuestionFormError::TypeConstraint(_)));
    }

    #[test]
    fn create_question_form_accepts_numeric_strings() {
        let form: CreateQuestionForm = serde_json::from_str(
            r#"{"question": "Q?", "answer": "A", "category": "4", "difficulty": "2"}"#,
        )
        .unwrap();
        let payload: CreateQuestionFormPayload = form.try_into().unwrap();
        assert_eq!(payload.category.get(), 4);
        assert_eq!(payload.difficulty.get(), 2);
    }

    #[test]
    fn create_question_form_rejects_non_numeric_category() {
        let form = serde_json::from_str::<CreateQuestionForm>(
            r#"{"question": "Q?", "answer": "A", "category": "sports", "difficulty": 2}"#,
        );
        assert!(form.is_err());
    }

    #[test]
    fn search_form_requires_term() {
        let form: SearchQuestionsForm = serde_json::from_str("{}").unwrap();
        assert!(SearchQuestionsFormPayload::try_from(form).is_err());

        let form: SearchQuestionsForm = serde_json::from_str(r#"{"searchTerm": ""}"#).unwrap();
        let payload = SearchQuestionsFormPayload::try_from(form).unwrap();
        assert_eq!(payload.term, "");
    }
}
