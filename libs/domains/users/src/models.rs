use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Account that can obtain API tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i64,
    /// Unique login name
    pub username: String,
    /// Argon2 PHC string (never exposed in API responses)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Inactive accounts cannot obtain or refresh tokens
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
}

/// Input for account creation; the password is hashed before storage
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 150), custom(function = "validate_username"))]
    pub username: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

/// Row to insert, already hashed
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

/// Letters, digits and `@.+-_` only
fn validate_username(username: &str) -> Result<(), ValidationError> {
    let allowed = |c: char| c.is_alphanumeric() || "@.+-_".contains(c);
    if username.chars().all(allowed) {
        Ok(())
    } else {
        Err(ValidationError::new("username_chars"))
    }
}

/// `POST /api/token/` body
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TokenObtainRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// `POST /api/token/refresh/` body
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TokenRefreshRequest {
    #[validate(length(min = 1))]
    pub refresh: String,
}

/// `POST /api/token/refresh/` response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccessTokenResponse {
    pub access: String,
}
