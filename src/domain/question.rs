use serde::{Deserialize, Serialize};

use crate::domain::types::{AnswerText, CategoryId, Difficulty, QuestionId, QuestionText};

/// A stored trivia question.
///
/// Questions are created and deleted but never edited in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub id: QuestionId,
    pub question: QuestionText,
    pub answer: AnswerText,
    pub category: CategoryId,
    pub difficulty: Difficulty,
}

/// Data required to insert a new [`Question`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewQuestion {
    pub question: QuestionText,
    pub answer: AnswerText,
    pub category: CategoryId,
    pub difficulty: Difficulty,
}
