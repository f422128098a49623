//! JSON response bodies.

use serde::Serialize;
use serde::ser::Serializer;

use crate::domain::category::Category;
use crate::domain::question::Question;
use crate::services::questions::{DeletedQuestion, QuestionPage};

/// Wire form of a question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionDto {
    fn from(value: Question) -> Self {
        Self {
            id: value.id.get(),
            question: value.question.into_inner(),
            answer: value.answer.into_inner(),
            category: value.category.get(),
            difficulty: value.difficulty.get(),
        }
    }
}

fn question_dtos(questions: Vec<Question>) -> Vec<QuestionDto> {
    questions.into_iter().map(QuestionDto::from).collect()
}

/// Categories rendered as a JSON object of `id -> type`, keeping the order
/// they were listed in.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMap(Vec<(i32, String)>);

impl From<Vec<Category>> for CategoryMap {
    fn from(value: Vec<Category>) -> Self {
        Self(
            value
                .into_iter()
                .map(|c| (c.id.get(), c.kind.into_inner()))
                .collect(),
        )
    }
}

impl Serialize for CategoryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(id, kind)| (id, kind)))
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

impl From<Vec<Category>> for CategoriesResponse {
    fn from(value: Vec<Category>) -> Self {
        Self {
            success: true,
            categories: value.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<String>,
}

impl From<QuestionPage> for QuestionPageResponse {
    fn from(value: QuestionPage) -> Self {
        Self {
            success: true,
            questions: question_dtos(value.questions),
            total_questions: value.total_questions,
            categories: value.categories.into(),
            current_category: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedQuestionResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
}

impl From<DeletedQuestion> for DeletedQuestionResponse {
    fn from(value: DeletedQuestion) -> Self {
        Self {
            success: true,
            deleted: value.deleted.get(),
            questions: question_dtos(value.questions),
            total_questions: value.total_questions,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedQuestionResponse {
    pub success: bool,
    pub created: i32,
    pub question: String,
}

impl From<Question> for CreatedQuestionResponse {
    fn from(value: Question) -> Self {
        Self {
            success: true,
            created: value.id.get(),
            question: value.question.into_inner(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResultsResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    pub current_category: String,
}

impl From<Vec<Question>> for SearchResultsResponse {
    fn from(value: Vec<Question>) -> Self {
        Self {
            success: true,
            total_questions: value.len(),
            questions: question_dtos(value),
            current_category: String::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
}

impl From<Vec<Question>> for CategoryQuestionsResponse {
    fn from(value: Vec<Question>) -> Self {
        Self {
            success: true,
            questions: question_dtos(value),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizQuestionResponse {
    pub success: bool,
    pub question: Option<QuestionDto>,
}

impl From<Option<Question>> for QuizQuestionResponse {
    fn from(value: Option<Question>) -> Self {
        Self {
            success: true,
            question: value.map(QuestionDto::from),
        }
    }
}
