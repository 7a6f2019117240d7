//! Shared application state for all routes.

use crate::repository::{ItemRepository, SqliteItemRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemRepository>,
}

impl AppState {
    /// State backed by the SQLite repository over `pool`.
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_repository(Arc::new(SqliteItemRepository::new(pool)))
    }

    /// State over any repository implementation.
    pub fn with_repository(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }
}
