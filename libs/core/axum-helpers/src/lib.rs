//! # Axum Helpers
//!
//! Shared plumbing for the HTTP services in this workspace.
//!
//! - **[`auth`]**: JWT issuance/verification and the bearer middleware
//! - **[`server`]**: router assembly, health probes, graceful shutdown
//! - **[`http`]**: CORS and security headers
//! - **[`errors`]**: [`AppError`] and the JSON error body
//! - **[`extractors`]**: [`IdPath`] and [`ValidatedJson`]

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use auth::{
    JwtAuth, JwtClaims, JwtConfig, JwtError, TokenPair, TokenType, jwt_auth_middleware,
};
pub use errors::{
    AppError, ErrorCode, ErrorResponse, NULL_FIELD_MESSAGE, REQUIRED_FIELD_MESSAGE,
};
pub use extractors::{IdPath, ValidatedJson, non_null};
pub use http::{CorsConfig, create_cors_layer, security_headers};
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks,
};
