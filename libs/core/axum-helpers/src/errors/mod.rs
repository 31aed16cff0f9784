pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use serde_path_to_error::Segment;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body of every error response.
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Item with id 42 not found"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Structured detail, e.g. per-field validation errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Application error type that renders as an [`ErrorResponse`].
///
/// Server-side failures are logged with their cause and answered with the
/// code's default message only.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    /// A body field that could not be deserialized (missing, `null` or wrong type)
    #[error("Invalid field `{field}`: {message}")]
    InvalidField {
        field: String,
        kind: &'static str,
        message: String,
    },

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::SerdeJson(_)
            | AppError::Database(_)
            | AppError::Io(_)
            | AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::JsonExtractorRejection(JsonRejection::MissingJsonContentType(_)) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            AppError::JsonExtractorRejection(_)
            | AppError::ValidationError(_)
            | AppError::InvalidField { .. }
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::SerdeJson(_) => ErrorCode::SerdeJsonError,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::JsonExtractorRejection(_) => ErrorCode::InvalidJson,
            AppError::ValidationError(_)
            | AppError::InvalidField { .. }
            | AppError::BadRequest(_) => ErrorCode::ValidationError,
            AppError::Unauthorized(_) => ErrorCode::Unauthorized,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Conflict(_) => ErrorCode::Conflict,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
            AppError::ServiceUnavailable(_) => ErrorCode::ServiceUnavailable,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        let body = match self {
            AppError::SerdeJson(_)
            | AppError::Database(_)
            | AppError::Io(_)
            | AppError::InternalServerError(_) => {
                tracing::error!(error_code = code.code(), error = %self, "Request failed");
                ErrorResponse::new(code, code.default_message())
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::info!(error_code = code.code(), error = %e, "Rejected request body");
                ErrorResponse::new(code, code.default_message())
                    .with_details(serde_json::json!({ "body": e.body_text() }))
            }
            AppError::ValidationError(e) => {
                tracing::info!(error_code = code.code(), error = %e, "Validation failed");
                let details = serde_json::to_value(&e).unwrap_or(serde_json::Value::Null);
                ErrorResponse::new(code, code.default_message()).with_details(details)
            }
            AppError::InvalidField {
                field,
                kind,
                message,
            } => {
                tracing::info!(error_code = code.code(), %field, %message, "Invalid body field");
                // Same shape as a serialized `ValidationErrors` entry
                let details = serde_json::json!({
                    field: [{ "code": kind, "message": message, "params": {} }]
                });
                ErrorResponse::new(code, code.default_message()).with_details(details)
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!(error_code = code.code(), "Service unavailable: {}", msg);
                ErrorResponse::new(code, msg)
            }
            AppError::BadRequest(msg)
            | AppError::Unauthorized(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg) => {
                tracing::info!(error_code = code.code(), "{}", msg);
                ErrorResponse::new(code, msg)
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Message for a required body field that is absent.
pub const REQUIRED_FIELD_MESSAGE: &str = "This field is required.";

/// Message for an optional body field sent as `null`.
pub const NULL_FIELD_MESSAGE: &str = "This field may not be null.";

impl From<serde_path_to_error::Error<serde_json::Error>> for AppError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path: Vec<String> = err
            .path()
            .iter()
            .filter_map(|segment| match segment {
                Segment::Map { key } => Some(key.clone()),
                _ => None,
            })
            .collect();
        let message = err.into_inner().to_string();

        // serde reports a missing field at the enclosing struct, not at the field
        if let Some(name) = missing_field_name(&message) {
            let field = path
                .into_iter()
                .chain(std::iter::once(name.to_string()))
                .collect::<Vec<_>>()
                .join(".");
            return AppError::InvalidField {
                field,
                kind: "required",
                message: REQUIRED_FIELD_MESSAGE.to_string(),
            };
        }

        let field = if path.is_empty() {
            "non_field_errors".to_string()
        } else {
            path.join(".")
        };
        let kind = if message == NULL_FIELD_MESSAGE {
            "null"
        } else {
            "invalid"
        };

        AppError::InvalidField {
            field,
            kind,
            message,
        }
    }
}

fn missing_field_name(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")?
        .split('`')
        .next()
}

/// Build a JSON error response without going through [`AppError`].
pub fn error_response(status: StatusCode, message: impl Into<String>, code: ErrorCode) -> Response {
    (status, Json(ErrorResponse::new(code, message))).into_response()
}
