//! Route definitions for the todo resource, mounted at the configured base path.

use axum::routing::get;
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// DELETE /        -> delete_all
/// GET    /{id}    -> get_by_id
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(todos::list).post(todos::create).delete(todos::delete_all),
        )
        .route(
            "/{id}",
            get(todos::get_by_id)
                .patch(todos::update)
                .delete(todos::delete),
        )
}
