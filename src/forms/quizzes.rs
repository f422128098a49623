use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{CategoryId, QuestionId, TypeConstraintError};
use crate::forms::deserialize_lenient_i32;

/// Category selector sent by quiz clients. Extra keys such as `type` are
/// ignored; an `id` of `0` selects every category.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct QuizCategoryForm {
    #[serde(default, deserialize_with = "deserialize_lenient_i32")]
    #[validate(required, range(min = 0))]
    pub id: Option<i32>,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize, Validate)]
pub struct QuizForm {
    #[validate(required, nested)]
    pub quiz_category: Option<QuizCategoryForm>,
    #[validate(required)]
    pub previous_questions: Option<Vec<i32>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizFormPayload {
    /// `None` plays across every category.
    pub category: Option<CategoryId>,
    pub previous_questions: Vec<QuestionId>,
}

#[derive(Debug, Error)]
pub enum QuizFormError {
    #[error("Quiz form validation failed: {0}")]
    Validation(String),
    #[error("Quiz form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for QuizFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for QuizFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<QuizForm> for QuizFormPayload {
    type Error = QuizFormError;

    fn try_from(value: QuizForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let category_id = value
            .quiz_category
            .and_then(|category| category.id)
            .ok_or_else(|| QuizFormError::Validation("quiz_category.id is required".to_string()))?;

        let category = match category_id {
            0 => None,
            id => Some(CategoryId::new(id)?),
        };

        // Ids that can never exist cannot be excluded either.
        let previous_questions = value
            .previous_questions
            .unwrap_or_default()
            .into_iter()
            .filter_map(|id| QuestionId::new(id).ok())
            .collect();

        Ok(Self {
            category,
            previous_questions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<QuizFormPayload, QuizFormError> {
        let form: QuizForm = serde_json::from_str(body).unwrap();
        form.try_into()
    }

    #[test]
    fn zero_category_means_all_categories() {
        let payload =
            parse(r#"{"quiz_category": {"type": "click", "id": 0}, "previous_questions": []}"#)
                .unwrap();
        assert_eq!(payload.category, None);
        assert!(payload.previous_questions.is_empty());
    }

    #[test]
    fn accepts_string_category_ids() {
        let payload = parse(
            r#"{"quiz_category": {"type": "Science", "id": "1"}, "previous_questions": [4, 9]}"#,
        )
        .unwrap();
        assert_eq!(payload.category, Some(CategoryId::new(1).unwrap()));
        assert_eq!(
            payload.previous_questions,
            vec![QuestionId::new(4).unwrap(), QuestionId::new(9).unwrap()]
        );
    }

    #[test]
    fn rejects_missing_category() {
        assert!(parse(r#"{"previous_questions": []}"#).is_err());
        assert!(parse(r#"{"quiz_category": {"type": "Art"}, "previous_questions": []}"#).is_err());
    }

    #[test]
    fn rejects_negative_category() {
        assert!(parse(r#"{"quiz_category": {"id": -2}, "previous_questions": []}"#).is_err());
    }

    #[test]
    fn nested_category_errors_are_reported_on_the_form() {
        let form: QuizForm =
            serde_json::from_str(r#"{"quiz_category": {"id": -1}, "previous_questions": []}"#)
                .unwrap();

        let errors = form.validate().unwrap_err();

        assert!(errors.errors().contains_key("quiz_category"));
    }

    #[test]
    fn rejects_missing_previous_questions() {
        assert!(parse(r#"{"quiz_category": {"id": 0}}"#).is_err());
    }
}
