//! SQLite-backed item repository. Every operation is exactly one statement.

use super::validation::RequestValidator;
use crate::error::RepoError;
use crate::model::{Item, ItemFilter};
use crate::sql::{
    select_list, QueryBuf, CHECK_ITEMS_TABLE, DELETE_ITEM, INSERT_ITEM, SELECT_ITEM_BY_ID, UPDATE_ITEM,
};
use async_trait::async_trait;
use sqlx::SqlitePool;

pub type RepoResult<T> = Result<T, RepoError>;

/// Item persistence operations. Handlers hold this as `Arc<dyn ItemRepository>`.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a row and return the id assigned by storage.
    async fn create(&self, name: &str, description: Option<&str>) -> RepoResult<i64>;

    /// Rows matching every present filter (substring match), in storage order.
    async fn list(&self, filter: &ItemFilter) -> RepoResult<Vec<Item>>;

    /// `RepoError::NotFound` when no row has this id.
    async fn get_by_id(&self, id: i64) -> RepoResult<Item>;

    /// Returns the number of rows changed; 0 means no such id.
    async fn update(&self, id: i64, name: &str, description: Option<&str>) -> RepoResult<u64>;

    /// Returns the number of rows removed; 0 means no such id.
    async fn delete(&self, id: i64) -> RepoResult<u64>;

    /// Succeeds when storage is reachable and the `items` table exists.
    async fn check(&self) -> RepoResult<()>;
}

#[derive(Clone)]
pub struct SqliteItemRepository {
    pool: SqlitePool,
}

impl SqliteItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn create(&self, name: &str, description: Option<&str>) -> RepoResult<i64> {
        let item = RequestValidator::item(Some(name), description)?;
        tracing::debug!(sql = %INSERT_ITEM, "query");
        let result = sqlx::query(INSERT_ITEM)
            .bind(item.name.as_str())
            .bind(item.description.as_deref())
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    async fn list(&self, filter: &ItemFilter) -> RepoResult<Vec<Item>> {
        let QueryBuf { sql, params } = select_list(filter);
        tracing::debug!(sql = %sql, params = ?params, "query");
        let mut query = sqlx::query_as::<_, Item>(&sql);
        for p in params {
            query = query.bind(p);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn get_by_id(&self, id: i64) -> RepoResult<Item> {
        tracing::debug!(sql = %SELECT_ITEM_BY_ID, id, "query");
        sqlx::query_as::<_, Item>(SELECT_ITEM_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound(id))
    }

    async fn update(&self, id: i64, name: &str, description: Option<&str>) -> RepoResult<u64> {
        let item = RequestValidator::item(Some(name), description)?;
        tracing::debug!(sql = %UPDATE_ITEM, id, "query");
        let result = sqlx::query(UPDATE_ITEM)
            .bind(item.name.as_str())
            .bind(item.description.as_deref())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> RepoResult<u64> {
        tracing::debug!(sql = %DELETE_ITEM, id, "query");
        let result = sqlx::query(DELETE_ITEM).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn check(&self) -> RepoResult<()> {
        sqlx::query(CHECK_ITEMS_TABLE).fetch_optional(&self.pool).await?;
        Ok(())
    }
}
