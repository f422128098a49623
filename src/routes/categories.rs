use actix_web::{HttpResponse, web};

use crate::dto::{CategoriesResponse, CategoryQuestionsResponse};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::PageQueryParams;
use crate::routes::errors::ApiError;
use crate::services::categories::{
    list_categories as list_categories_service,
    list_category_questions as list_category_questions_service,
};

pub async fn list_categories(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let categories = list_categories_service(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(CategoriesResponse::from(categories)))
}

pub async fn list_category_questions(
    category_id: web::Path<i32>,
    params: web::Query<PageQueryParams>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ApiError> {
    let questions = list_category_questions_service(
        category_id.into_inner(),
        params.page(),
        server_config.questions_per_page,
        repo.get_ref(),
    )?;
    Ok(HttpResponse::Ok().json(CategoryQuestionsResponse::from(questions)))
}
