use actix_web::{HttpResponse, web};

use crate::dto::QuizQuestionResponse;
use crate::forms::quizzes::QuizForm;
use crate::repository::DieselRepository;
use crate::routes::errors::ApiError;
use crate::services::quizzes::next_quiz_question as next_quiz_question_service;

pub async fn next_quiz_question(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<QuizForm>,
) -> Result<HttpResponse, ApiError> {
    let mut rng = rand::thread_rng();
    let question = next_quiz_question_service(form, repo.get_ref(), &mut rng)?;
    Ok(HttpResponse::Ok().json(QuizQuestionResponse::from(question)))
}
