//! Handlers for the todo collection and its items.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use todo_core::types::DbId;
use todo_db::models::todo::{CreateTodo, UpdateTodo};
use todo_db::repositories::TodoRepo;
use todo_db::update::{resolve, UpdatePlan};

use crate::error::{AppError, AppResult};
use crate::extract::RequestUrl;
use crate::response::TodoResponse;
use crate::state::AppState;

/// GET {base}
pub async fn list(
    State(state): State<AppState>,
    RequestUrl(url): RequestUrl,
) -> AppResult<Json<Vec<TodoResponse>>> {
    let items = TodoRepo::list(&state.pool).await?;
    tracing::info!(count = items.len(), "Listed todo items");

    let body: Vec<TodoResponse> = items
        .into_iter()
        .map(|item| TodoResponse::from_item(item, &url))
        .collect();
    Ok(Json(body))
}

/// GET {base}/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    RequestUrl(url): RequestUrl,
) -> AppResult<Json<TodoResponse>> {
    tracing::info!(todo_id = id, "Fetching todo item");

    let item = TodoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::todo_not_found(id))?;
    Ok(Json(TodoResponse::from_item(item, &url)))
}

/// POST {base}
pub async fn create(
    State(state): State<AppState>,
    RequestUrl(url): RequestUrl,
    Json(input): Json<CreateTodo>,
) -> AppResult<(StatusCode, Json<TodoResponse>)> {
    let item = TodoRepo::create(&state.pool, &input).await?;
    tracing::info!(todo_id = item.id, "Todo item created");

    Ok((StatusCode::CREATED, Json(TodoResponse::from_item(item, &url))))
}

/// PATCH {base}/{id}
///
/// Only fields present in the body are written. A body with no fields is
/// answered like a GET of the same item.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    RequestUrl(url): RequestUrl,
    Json(input): Json<UpdateTodo>,
) -> AppResult<Json<TodoResponse>> {
    let assignments = match resolve(&input)? {
        UpdatePlan::NoOp => {
            tracing::info!(todo_id = id, "Empty update, returning current state");
            let item = TodoRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or_else(|| AppError::todo_not_found(id))?;
            return Ok(Json(TodoResponse::from_item(item, &url)));
        }
        UpdatePlan::Apply(assignments) => assignments,
    };

    let rows = TodoRepo::apply_update(&state.pool, id, &assignments).await?;
    if rows == 0 {
        return Err(AppError::todo_not_found(id));
    }
    tracing::info!(todo_id = id, fields = assignments.len(), "Todo item updated");

    // The row can vanish between the update and this read.
    let item = TodoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::todo_not_found(id))?;
    Ok(Json(TodoResponse::from_item(item, &url)))
}

/// DELETE {base}/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TodoRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::todo_not_found(id));
    }

    tracing::info!(todo_id = id, "Todo item deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE {base}
pub async fn delete_all(State(state): State<AppState>) -> AppResult<StatusCode> {
    let count = TodoRepo::delete_all(&state.pool).await?;
    tracing::info!(count, "All todo items deleted");

    Ok(StatusCode::NO_CONTENT)
}
