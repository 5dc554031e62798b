//! REST CRUD backend for the course project entities (menu item reviews, dining commons
//! and their menu items, student organizations, recommendation and help requests,
//! articles, academic calendar dates) plus the current-user and system-info endpoints.

pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod repository;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{Settings, StorageKind, SystemInfo};
pub use error::{AppError, BootstrapError, ConfigError};
pub use repository::{InMemoryRepository, PgRepository, Repository};
pub use routes::{api_routes, app, common_routes, resource_routes, system_routes};
pub use state::{AppState, Storage};
pub use store::{ensure_database_exists, ensure_tables};
