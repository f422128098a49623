use actix_web::{HttpResponse, web};

use crate::dto::{
    CreatedQuestionResponse, DeletedQuestionResponse, QuestionPageResponse,
    SearchResultsResponse,
};
use crate::forms::questions::{CreateQuestionForm, SearchQuestionsForm};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::PageQueryParams;
use crate::routes::errors::ApiError;
use crate::services::questions::{
    create_question as create_question_service, delete_question as delete_question_service,
    list_questions as list_questions_service, search_questions as search_questions_service,
};

pub async fn list_questions(
    params: web::Query<PageQueryParams>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ApiError> {
    let page = list_questions_service(
        params.page(),
        server_config.questions_per_page,
        repo.get_ref(),
    )?;
    Ok(HttpResponse::Ok().json(QuestionPageResponse::from(page)))
}

pub async fn delete_question(
    question_id: web::Path<i32>,
    params: web::Query<PageQueryParams>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ApiError> {
    let result = delete_question_service(
        question_id.into_inner(),
        params.page(),
        server_config.questions_per_page,
        repo.get_ref(),
    )?;
    Ok(HttpResponse::Ok().json(DeletedQuestionResponse::from(result)))
}

pub async fn create_question(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateQuestionForm>,
) -> Result<HttpResponse, ApiError> {
    let question = create_question_service(form, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(CreatedQuestionResponse::from(question)))
}

pub async fn search_questions(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<SearchQuestionsForm>,
) -> Result<HttpResponse, ApiError> {
    let questions = search_questions_service(form, repo.get_ref())?;
    Ok(HttpResponse::Ok().json(SearchResultsResponse::from(questions)))
}
