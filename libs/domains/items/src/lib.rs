//! Items Domain
//!
//! To-do items stored in PostgreSQL.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← /Item/ and /Item/{id}/
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, not-found handling
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + PostgreSQL and in-memory implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, payloads, ordering
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, PgItemRepository, ItemService};
//! use sea_orm::DatabaseConnection;
//!
//! fn items_router(db: DatabaseConnection) -> axum::Router {
//!     let service = ItemService::new(PgItemRepository::new(db));
//!     handlers::router(service)
//! }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateItem, ITEM_FIELDS, Item, ItemOrdering, ItemSortKey, ReplaceItem, SortDirection,
    UpdateItem,
};
pub use postgres::PgItemRepository;
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use service::ItemService;
