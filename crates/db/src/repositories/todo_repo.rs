//! Repository for the `todo_items` table.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use todo_core::types::DbId;

use crate::models::todo::{CreateTodo, TodoItem};
use crate::update::{Assignment, ColumnValue};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, completed, sort_order";

/// Provides CRUD operations for todo items.
pub struct TodoRepo;

impl TodoRepo {
    /// List all todo items ordered by id ascending.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<TodoItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todo_items ORDER BY id ASC");
        sqlx::query_as::<_, TodoItem>(&query).fetch_all(pool).await
    }

    /// Find a todo item by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<TodoItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todo_items WHERE id = ?1");
        sqlx::query_as::<_, TodoItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new todo item, returning the stored row with its assigned id.
    pub async fn create(pool: &SqlitePool, input: &CreateTodo) -> Result<TodoItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO todo_items (title, completed, sort_order)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TodoItem>(&query)
            .bind(&input.title)
            .bind(input.completed)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Apply resolved assignments to one row in a single `UPDATE`.
    ///
    /// Returns the number of rows affected: `0` when no row has that id.
    /// An empty assignment list writes nothing and reports `0`.
    pub async fn apply_update(
        pool: &SqlitePool,
        id: DbId,
        assignments: &[Assignment],
    ) -> Result<u64, sqlx::Error> {
        if assignments.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE todo_items SET ");
        {
            let mut set = builder.separated(", ");
            for assignment in assignments {
                set.push(format!("{} = ", assignment.column.as_str()));
                match &assignment.value {
                    ColumnValue::Text(v) => set.push_bind_unseparated(v.clone()),
                    ColumnValue::Bool(v) => set.push_bind_unseparated(*v),
                    ColumnValue::BigInt(v) => set.push_bind_unseparated(*v),
                };
            }
        }
        builder.push(" WHERE id = ").push_bind(id);

        let result = builder.build().execute(pool).await?;
        tracing::debug!(
            todo_id = id,
            columns = assignments.len(),
            rows = result.rows_affected(),
            "Applied todo update"
        );
        Ok(result.rows_affected())
    }

    /// Delete a todo item by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todo_items WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every todo item. Returns the number of rows removed.
    pub async fn delete_all(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todo_items").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
