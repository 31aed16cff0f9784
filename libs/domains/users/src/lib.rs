//! Users Domain
//!
//! Accounts and the JWT token endpoints.
//!
//! # Features
//!
//! - Password hashing with Argon2
//! - Credential checks (`POST /token/`)
//! - Access token refresh (`POST /token/refresh/`)
//! - Active-account check for routes behind the bearer middleware
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐
//! │ Auth handlers │  ← Token endpoints
//! └──────┬────────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Password hashing, credential checks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + PostgreSQL and in-memory implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← User, request/response bodies
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum_helpers::{JwtAuth, JwtConfig};
//! use domain_users::{auth_handlers, InMemoryUserRepository, UserService};
//!
//! # fn example(config: JwtConfig) -> axum::Router {
//! let service = UserService::new(InMemoryUserRepository::new());
//! auth_handlers::auth_router(service, JwtAuth::new(&config))
//! # }
//! ```

pub mod auth_handlers;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use auth_handlers::{AuthApiDoc, auth_router};
pub use error::{UserError, UserResult};
pub use middleware::active_user_middleware;
pub use models::{AccessTokenResponse, CreateUser, TokenObtainRequest, TokenRefreshRequest, User};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
