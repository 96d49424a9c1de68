use serde::{Serialize, Deserialize};
use thiserror::Error;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    ValidationFailed,
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}


#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0}")]
    ValidationFailed(String),
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
    #[error("Stored data is malformed: {0}")]
    MalformedData(#[from] serde_json::Error),
}

impl ServiceError {
    pub fn not_found(what: impl Into<String>) -> Self {
        ServiceError::NotFound(what.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::ValidationFailed(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ServiceError::NotFound(_) => ErrorCode::NotFound,
            ServiceError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            ServiceError::Database(_) | ServiceError::MalformedData(_) => ErrorCode::Internal,
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;


#[derive(Debug, Clone, Error)]
#[error("Unknown {kind} '{value}'")]
pub struct UnknownVariantError {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariantError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        UnknownVariantError { kind, value: value.into() }
    }
}
