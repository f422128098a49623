use rand::Rng;

use crate::domain::question::Question;
use crate::forms::quizzes::{QuizForm, QuizFormPayload};
use crate::repository::{QuestionListQuery, QuestionReader};

use super::{ServiceError, ServiceResult};

/// Pick the next quiz question uniformly from `candidates`.
///
/// `None` signals that the quiz is over.
pub fn pick_question<G>(mut candidates: Vec<Question>, rng: &mut G) -> Option<Question>
where
    G: Rng,
{
    match candidates.len() {
        0 => None,
        1 => candidates.pop(),
        len => Some(candidates.swap_remove(rng.gen_range(0..len))),
    }
}

/// A random question from the chosen category (or any category) that is not
/// among the previously asked ones. Never modifies stored data.
pub fn next_quiz_question<R, G>(
    form: QuizForm,
    repo: &R,
    rng: &mut G,
) -> ServiceResult<Option<Question>>
where
    R: QuestionReader,
    G: Rng,
{
    let payload: QuizFormPayload = form.try_into()?;

    let mut query = QuestionListQuery::default().exclude(payload.previous_questions);
    if let Some(category) = payload.category {
        query = query.category(category);
    }

    let candidates = match repo.list_questions(query) {
        Ok((_total, questions)) => questions,
        Err(e) => {
            return Err(ServiceError::from_repository(
                "Failed to load quiz candidates",
                e,
            ));
        }
    };

    Ok(pick_question(candidates, rng))
}
