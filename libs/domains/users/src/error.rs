use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "No active account found with the given credentials";
pub const INVALID_TOKEN_MESSAGE: &str = "Token is invalid or expired";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";
pub const USER_INACTIVE_MESSAGE: &str = "User is inactive";

#[derive(Debug, Error)]
pub enum UserError {
    /// Unknown username, wrong password or inactive account
    #[error("No active account found with the given credentials")]
    InvalidCredentials,

    /// Refresh token rejected, or its user is gone or inactive
    #[error("Token is invalid or expired")]
    InvalidToken,

    /// Access token subject no longer exists
    #[error("User not found")]
    UserNotFound,

    #[error("User is inactive")]
    UserInactive,

    #[error("A user with username '{0}' already exists")]
    DuplicateUsername(String),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Token signing error: {0}")]
    TokenSigning(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidCredentials => {
                AppError::Unauthorized(INVALID_CREDENTIALS_MESSAGE.to_string())
            }
            UserError::InvalidToken => AppError::Unauthorized(INVALID_TOKEN_MESSAGE.to_string()),
            UserError::UserNotFound => AppError::Unauthorized(USER_NOT_FOUND_MESSAGE.to_string()),
            UserError::UserInactive => AppError::Unauthorized(USER_INACTIVE_MESSAGE.to_string()),
            UserError::DuplicateUsername(username) => {
                AppError::Conflict(format!("A user with username '{username}' already exists"))
            }
            UserError::Validation(errors) => AppError::ValidationError(errors),
            UserError::PasswordHash(msg) | UserError::TokenSigning(msg) => {
                AppError::InternalServerError(msg)
            }
            UserError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_auth_failures_are_401() {
        for err in [
            UserError::InvalidCredentials,
            UserError::InvalidToken,
            UserError::UserNotFound,
            UserError::UserInactive,
        ] {
            let app: AppError = err.into();
            assert_eq!(app.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_duplicate_username_is_conflict() {
        let app: AppError = UserError::DuplicateUsername("alice".into()).into();
        assert_eq!(app.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_hashing_failure_is_500() {
        let response = UserError::PasswordHash("bad salt".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
