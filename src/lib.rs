//! Items service: REST CRUD over a single SQLite `items` table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError, Operation, RepoError};
pub use model::{Item, ItemFilter, ItemPayload, NewItem};
pub use repository::{ItemRepository, RepoResult, RequestValidator, SqliteItemRepository};
pub use routes::{app, item_routes, ops_routes};
pub use state::AppState;
pub use store::{connect, ensure_items_table, open_in_memory};
