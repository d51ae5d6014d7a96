//! Wire representation of todo items.
//!
//! Every item returned by the API carries a canonical `url` pointing at its
//! single-item GET path. The same mapping serves collection responses
//! (request URL is the collection, the id must be appended) and single-item
//! responses (request URL already ends with the id).

use serde::Serialize;
use todo_core::types::DbId;
use todo_db::models::todo::TodoItem;
use url::Url;

/// API response object for one todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoResponse {
    pub id: DbId,
    pub title: Option<String>,
    pub completed: bool,
    pub order: Option<i64>,
    pub url: String,
}

impl TodoResponse {
    pub fn from_item(item: TodoItem, request_url: &Url) -> Self {
        let url = item_url(request_url, item.id).to_string();
        Self {
            id: item.id,
            title: item.title,
            completed: item.completed,
            order: item.sort_order,
            url,
        }
    }
}

/// Canonical URL of the item with `id`, derived from the request URL.
///
/// If the last path segment already equals the id the request URL is reused;
/// otherwise `/{id}` is appended. Empty segments are collapsed, dot segments
/// are resolved when the URL is parsed, and query and fragment are dropped.
pub fn item_url(request_url: &Url, id: DbId) -> Url {
    let id = id.to_string();
    let mut segments: Vec<&str> = request_url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    if segments.last() != Some(&id.as_str()) {
        segments.push(&id);
    }

    let mut url = request_url.clone();
    url.set_path(&format!("/{}", segments.join("/")));
    url.set_query(None);
    url.set_fragment(None);
    url
}
