use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;
pub mod update;

pub type DbPool = sqlx::SqlitePool;

/// Default pool size for file-backed databases.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const SCHEMA: &str = "\
    CREATE TABLE IF NOT EXISTS todo_items (\
        id INTEGER PRIMARY KEY AUTOINCREMENT, \
        title TEXT, \
        completed BOOLEAN NOT NULL DEFAULT 0, \
        sort_order BIGINT\
    )";

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    create_pool_with(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a connection pool with an explicit connection cap.
///
/// In-memory databases live only as long as their connection, so they are
/// pinned to a single connection that the pool never reaps.
pub async fn create_pool_with(
    database_url: &str,
    max_connections: u32,
) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    if is_in_memory(database_url) {
        return SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await;
    }

    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await
}

/// Create the `todo_items` table if it does not exist yet.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    tracing::debug!("todo_items schema ensured");
    Ok(())
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
