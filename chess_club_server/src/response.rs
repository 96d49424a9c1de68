use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::response::{IntoResponse, Response};
use axum::Json;
use hyper::StatusCode;
use serde::{Serialize, Deserialize};
use tracing::{debug, error};

use chess_club_entities::error::{ErrorCode, ServiceError};


#[derive(Debug, Clone)]
pub struct APIError {
    pub message: String,
    pub code: ErrorCode,
    pub status: StatusCode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct APIErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

impl APIError {
    pub fn new(message: String) -> Self {
        APIError {
            message,
            code: ErrorCode::Internal,
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn new_with_status(status: StatusCode, message: impl Into<String>) -> Self {
        let code = match status {
            StatusCode::NOT_FOUND => ErrorCode::NotFound,
            s if s.is_client_error() => ErrorCode::ValidationFailed,
            _ => ErrorCode::Internal,
        };
        APIError { message: message.into(), code, status }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new_with_status(StatusCode::BAD_REQUEST, message)
    }
}

impl From<ServiceError> for APIError {
    fn from(err: ServiceError) -> Self {
        match err.code() {
            ErrorCode::NotFound => {
                debug!("Not found: {}", err);
                APIError::new_with_status(StatusCode::NOT_FOUND, err.to_string())
            },
            ErrorCode::ValidationFailed => {
                debug!("Validation failed: {}", err);
                APIError::validation(err.to_string())
            },
            ErrorCode::Internal => {
                error!("Error while handling request {}", err);
                APIError::new("Internal server error".into())
            }
        }
    }
}

impl From<sea_orm::DbErr> for APIError {
    fn from(err: sea_orm::DbErr) -> Self {
        ServiceError::from(err).into()
    }
}

impl From<PathRejection> for APIError {
    fn from(rejection: PathRejection) -> Self {
        debug!("Rejected path: {}", rejection.body_text());
        APIError::validation(rejection.body_text())
    }
}

impl From<JsonRejection> for APIError {
    fn from(rejection: JsonRejection) -> Self {
        debug!("Rejected body: {}", rejection.body_text());
        APIError::validation(rejection.body_text())
    }
}

impl IntoResponse for APIError
{
    fn into_response(self) -> Response {
        (
            self.status,
            Json(APIErrorResponse { code: self.code, message: self.message })
        ).into_response()
    }
}
