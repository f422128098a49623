use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::services::ServiceError;

/// Errors surfaced to HTTP clients, each rendered as
/// `{"success": false, "error": <code>, "message": <text>}`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("bad request")]
    BadRequest,
    #[error("not found")]
    NotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("unprocessable entity")]
    UnprocessableEntity,
    #[error("internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.to_string(),
        })
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound => ApiError::NotFound,
            ServiceError::Validation(message) => {
                log::debug!("Rejected request: {message}");
                ApiError::UnprocessableEntity
            }
            ServiceError::Rejected(_) => ApiError::UnprocessableEntity,
            ServiceError::Internal => ApiError::Internal,
        }
    }
}

/// Well-formed JSON of the wrong shape is unprocessable; anything that is
/// not JSON at all is a bad request.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let api_error = match &err {
        JsonPayloadError::Deserialize(e) if e.is_data() => ApiError::UnprocessableEntity,
        _ => ApiError::BadRequest,
    };
    log::debug!("Invalid JSON body for {}: {err}", req.path());
    api_error.into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("Invalid query string for {}: {err}", req.path());
    ApiError::BadRequest.into()
}

pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("Invalid path parameter in {}: {err}", req.path());
    ApiError::NotFound.into()
}
