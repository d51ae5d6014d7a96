//! Todo item models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::patch::Patch;
use todo_core::types::DbId;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `todo_items` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct TodoItem {
    pub id: DbId,
    pub title: Option<String>,
    pub completed: bool,
    pub sort_order: Option<i64>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a todo item. The store assigns the id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, rename = "order")]
    pub sort_order: Option<i64>,
}

/// DTO for partially updating a todo item.
///
/// Each field distinguishes omitted, `null` and a value; see [`Patch`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub completed: Patch<bool>,
    #[serde(default, rename = "order")]
    pub sort_order: Patch<i64>,
}

impl UpdateTodo {
    /// `true` if at least one field was sent.
    pub fn has_any_update(&self) -> bool {
        self.title.is_present() || self.completed.is_present() || self.sort_order.is_present()
    }
}
