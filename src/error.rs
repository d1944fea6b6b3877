use crate::db::models::api::ApiResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

/// Stable error codes carried in the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    IssueNotFound,
    LabelNotFound,
    CommentNotFound,
    UserNotFound,
    IssueLabelNotFound,
    ValidationError,
    InvalidStatus,
    InvalidParentComment,
    InvalidQueryParam,
    BadRequest,
    DuplicateLabel,
    DuplicateEmail,
    AuthenticationFailed,
    Forbidden,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::IssueNotFound => "ISSUE_NOT_FOUND",
            ErrorCode::LabelNotFound => "LABEL_NOT_FOUND",
            ErrorCode::CommentNotFound => "COMMENT_NOT_FOUND",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::IssueLabelNotFound => "ISSUE_LABEL_NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidStatus => "INVALID_STATUS",
            ErrorCode::InvalidParentComment => "INVALID_PARENT_COMMENT",
            ErrorCode::InvalidQueryParam => "INVALID_QUERY_PARAM",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::DuplicateLabel => "DUPLICATE_LABEL",
            ErrorCode::DuplicateEmail => "DUPLICATE_EMAIL",
            ErrorCode::AuthenticationFailed => "AUTHENTICATION_FAILED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("Not found: {message}")]
    NotFound { code: ErrorCode, message: String },

    #[error("Validation error: {message}")]
    Validation { code: ErrorCode, message: String },

    #[error("Duplicate: {message}")]
    Duplicate { code: ErrorCode, message: String },

    #[error("Authentication failed: {message}")]
    Auth { message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, response) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::error(ErrorCode::InternalError, "Database error"),
                )
            }
            AppError::Pool(ref e) => {
                tracing::error!("Connection pool error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::error(ErrorCode::InternalError, "Connection error"),
                )
            }
            AppError::Bcrypt(ref e) => {
                tracing::error!("Bcrypt error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::error(ErrorCode::InternalError, "Password processing error"),
                )
            }
            AppError::NotFound { code, ref message } => (
                StatusCode::NOT_FOUND,
                ApiResponse::<()>::error(code, message),
            ),
            AppError::Validation { code, ref message } => (
                StatusCode::BAD_REQUEST,
                ApiResponse::<()>::error(code, message),
            ),
            AppError::Duplicate { code, ref message } => (
                StatusCode::CONFLICT,
                ApiResponse::<()>::error(code, message),
            ),
            AppError::Auth { ref message } => (
                StatusCode::UNAUTHORIZED,
                ApiResponse::<()>::error(ErrorCode::AuthenticationFailed, message),
            ),
            AppError::Forbidden { ref message } => (
                StatusCode::FORBIDDEN,
                ApiResponse::<()>::error(ErrorCode::Forbidden, message),
            ),
            AppError::Config(ref e) => {
                tracing::error!("Configuration error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::error(ErrorCode::InternalError, "Configuration error"),
                )
            }
            AppError::Internal(ref message) => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::error(ErrorCode::InternalError, "Internal server error"),
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            code: ErrorCode::ValidationError,
            message: message.into(),
        }
    }

    pub fn validation_with_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Validation {
            code,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            code: ErrorCode::BadRequest,
            message: message.into(),
        }
    }

    pub fn duplicate(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Duplicate {
            code,
            message: message.into(),
        }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Status this error translates to, without building the full response.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Duplicate { .. } => StatusCode::CONFLICT,
            AppError::Auth { .. } => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
