//! Bearer-token authentication.
//!
//! - [`JwtAuth`] issues access/refresh token pairs and verifies them
//! - [`jwt_auth_middleware`] guards routes that need a valid access token
//!
//! ```ignore
//! use axum_helpers::auth::{JwtAuth, JwtConfig, jwt_auth_middleware};
//! use core_config::FromEnv;
//!
//! let auth = JwtAuth::new(&JwtConfig::from_env()?);
//!
//! let protected = Router::new()
//!     .route("/Item/", get(list_items))
//!     .route_layer(axum::middleware::from_fn_with_state(auth, jwt_auth_middleware));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::JwtConfig;
pub use jwt::{
    DEFAULT_ACCESS_TOKEN_TTL, DEFAULT_REFRESH_TOKEN_TTL, JwtAuth, JwtClaims, JwtError, TokenPair,
    TokenType,
};
pub use middleware::jwt_auth_middleware;
