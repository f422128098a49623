use actix_web::http::{Method, header};
use actix_web::{HttpRequest, HttpResponse, middleware, web};
use serde::Deserialize;

use errors::{ApiError, json_error_handler, path_error_handler, query_error_handler};

pub mod categories;
pub mod errors;
pub mod questions;
pub mod quizzes;

/// `?page=N` query string shared by paginated endpoints.
#[derive(Deserialize, Debug)]
pub struct PageQueryParams {
    pub page: Option<i64>,
}

impl PageQueryParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}

/// Register every endpoint of the trivia API.
///
/// Each resource answers unsupported verbs with 405; the application's
/// default service (see [`not_found`]) covers unknown paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::resource("/categories")
                .route(web::get().to(categories::list_categories))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource(r"/categories/{category_id:\d+}/questions")
                .route(web::get().to(categories::list_category_questions))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/questions")
                .route(web::get().to(questions::list_questions))
                .route(web::post().to(questions::create_question))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/questions/search_results")
                .route(web::post().to(questions::search_questions))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource(r"/questions/{question_id:\d+}")
                .route(web::delete().to(questions::delete_question))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/quizzes")
                .route(web::post().to(quizzes::next_quiz_question))
                .default_service(web::to(method_not_allowed)),
        );
}

/// Headers letting browser clients on any origin call the API.
pub fn cors_headers() -> middleware::DefaultHeaders {
    middleware::DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            "Content-Type,Authorization,true",
        ))
        .add((
            header::ACCESS_CONTROL_ALLOW_METHODS,
            "GET,POST,DELETE,PATCH,OPTIONS",
        ))
}

fn preflight(req: &HttpRequest) -> Option<HttpResponse> {
    (req.method() == Method::OPTIONS).then(|| HttpResponse::NoContent().finish())
}

/// Fallback for a known path requested with an unsupported verb.
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    preflight(&req).ok_or(ApiError::MethodNotAllowed)
}

/// Fallback for paths the API does not serve.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    preflight(&req).ok_or(ApiError::NotFound)
}
