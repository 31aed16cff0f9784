//! PostgreSQL access layer shared by the domain crates.
//!
//! # Features
//!
//! - `postgres` (default): SeaORM connector, migrations, health check, [`BaseRepository`]
//! - `config`: `core_config::FromEnv` for [`postgres::PostgresConfig`]
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config_with_retry(PostgresConfig::from_env()?, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "todo_api").await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "postgres")]
pub mod repository;

pub use common::{DatabaseError, DatabaseResult, RetryConfig};

#[cfg(feature = "postgres")]
pub use repository::BaseRepository;
