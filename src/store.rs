//! SQLite pool bootstrap and `items` table DDL.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

const ITEMS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT,
        created_at TEXT DEFAULT CURRENT_TIMESTAMP
    )
"#;

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Open a pool for `database_url`, creating the database file if it does not exist.
///
/// An in-memory database lives and dies with its connection, so it gets exactly one
/// connection that is never recycled.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool_options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };
    let pool = pool_options.connect_with(options).await?;
    tracing::info!(database_url = %database_url, "database pool ready");
    Ok(pool)
}

/// Create the `items` table if absent.
pub async fn ensure_items_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(ITEMS_DDL).execute(pool).await?;
    Ok(())
}

/// Fresh in-memory database with the schema applied. Each call is isolated.
pub async fn open_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let pool = connect("sqlite::memory:", 1).await?;
    ensure_items_table(&pool).await?;
    Ok(pool)
}
