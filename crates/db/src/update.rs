//! Partial-update resolution for `todo_items`.
//!
//! Turns an [`UpdateTodo`] into the column assignments a single `UPDATE`
//! statement should apply. Only fields the client actually sent produce an
//! assignment; an explicit `null` produces a `NULL` assignment.

use todo_core::error::CoreError;
use todo_core::patch::Patch;

use crate::models::todo::UpdateTodo;

/// Writable columns of `todo_items`.
///
/// Column names reach SQL only through [`TodoColumn::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoColumn {
    Title,
    Completed,
    SortOrder,
}

impl TodoColumn {
    pub fn as_str(self) -> &'static str {
        match self {
            TodoColumn::Title => "title",
            TodoColumn::Completed => "completed",
            TodoColumn::SortOrder => "sort_order",
        }
    }
}

/// A value to bind for one assignment. `None` writes `NULL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValue {
    Text(Option<String>),
    Bool(bool),
    BigInt(Option<i64>),
}

/// `column = value` in the `SET` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub column: TodoColumn,
    pub value: ColumnValue,
}

/// Outcome of resolving an update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdatePlan {
    /// Nothing was sent; the caller must not write.
    NoOp,
    /// Assignments in column order: title, completed, sort_order.
    Apply(Vec<Assignment>),
}

/// Resolve which columns an update request touches.
///
/// `completed` is `NOT NULL`, so an explicit `null` for it is rejected here
/// rather than at the store.
pub fn resolve(dto: &UpdateTodo) -> Result<UpdatePlan, CoreError> {
    if !dto.has_any_update() {
        return Ok(UpdatePlan::NoOp);
    }

    let mut assignments = Vec::with_capacity(3);

    if let Some(title) = dto.title.as_ref().into_write() {
        assignments.push(Assignment {
            column: TodoColumn::Title,
            value: ColumnValue::Text(title.cloned()),
        });
    }

    match dto.completed {
        Patch::Absent => {}
        Patch::Null => {
            return Err(CoreError::Validation("completed cannot be null".into()));
        }
        Patch::Value(completed) => assignments.push(Assignment {
            column: TodoColumn::Completed,
            value: ColumnValue::Bool(completed),
        }),
    }

    if let Some(sort_order) = dto.sort_order.into_write() {
        assignments.push(Assignment {
            column: TodoColumn::SortOrder,
            value: ColumnValue::BigInt(sort_order),
        });
    }

    Ok(UpdatePlan::Apply(assignments))
}
