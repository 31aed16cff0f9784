//! Shared application state.

use axum_helpers::JwtAuth;

/// Cloned into the routers that need it (Arc clones inside).
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: database::postgres::DatabaseConnection,
    /// Issues and verifies bearer tokens
    pub jwt_auth: JwtAuth,
}
