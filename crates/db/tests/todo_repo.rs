//! Integration tests for the `todo_items` repository.
//!
//! Each test runs against its own in-memory SQLite database:
//! - Create / find / list ordering
//! - Partial updates through the resolver, including clearing `sort_order`
//! - Delete and delete-all semantics

use todo_db::models::todo::{CreateTodo, TodoItem, UpdateTodo};
use todo_db::repositories::TodoRepo;
use todo_db::update::{self, UpdatePlan};
use todo_db::DbPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn test_pool() -> DbPool {
    let pool = todo_db::create_pool("sqlite::memory:").await.unwrap();
    todo_db::ensure_schema(&pool).await.unwrap();
    pool
}

fn new_todo(title: &str, completed: bool, sort_order: Option<i64>) -> CreateTodo {
    CreateTodo {
        title: Some(title.to_string()),
        completed,
        sort_order,
    }
}

async fn apply(pool: &DbPool, id: i64, json: &str) -> u64 {
    let dto: UpdateTodo = serde_json::from_str(json).unwrap();
    match update::resolve(&dto).unwrap() {
        UpdatePlan::Apply(assignments) => TodoRepo::apply_update(pool, id, &assignments)
            .await
            .unwrap(),
        UpdatePlan::NoOp => panic!("expected assignments for {json}"),
    }
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_assigns_id_and_echoes_fields() {
    let pool = test_pool().await;

    let item = TodoRepo::create(&pool, &new_todo("Take over the world", false, Some(5)))
        .await
        .unwrap();

    assert!(item.id > 0);
    assert_eq!(item.title.as_deref(), Some("Take over the world"));
    assert!(!item.completed);
    assert_eq!(item.sort_order, Some(5));

    let found = TodoRepo::find_by_id(&pool, item.id).await.unwrap();
    assert_eq!(found, Some(item));
}

#[tokio::test]
async fn create_with_defaults_stores_nulls() {
    let pool = test_pool().await;

    let item = TodoRepo::create(&pool, &CreateTodo::default()).await.unwrap();

    assert_eq!(item.title, None);
    assert!(!item.completed);
    assert_eq!(item.sort_order, None);
}

#[tokio::test]
async fn find_missing_id_returns_none() {
    let pool = test_pool().await;
    assert_eq!(TodoRepo::find_by_id(&pool, 999).await.unwrap(), None);
}

#[tokio::test]
async fn list_is_sorted_by_id() {
    let pool = test_pool().await;

    let mut created = Vec::new();
    for (title, order) in [("c", Some(1)), ("a", None), ("b", Some(-4))] {
        created.push(TodoRepo::create(&pool, &new_todo(title, false, order)).await.unwrap());
    }

    let listed = TodoRepo::list(&pool).await.unwrap();
    let ids: Vec<i64> = listed.iter().map(|t| t.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();

    assert_eq!(ids, sorted);
    assert_eq!(listed, created);
}

// ---------------------------------------------------------------------------
// Partial updates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_touches_only_sent_fields() {
    let pool = test_pool().await;
    let item = TodoRepo::create(&pool, &new_todo("binge watch Friendz", false, Some(1337)))
        .await
        .unwrap();

    let rows = apply(&pool, item.id, r#"{"title": "binge watch Friends"}"#).await;
    assert_eq!(rows, 1);

    let updated = TodoRepo::find_by_id(&pool, item.id).await.unwrap().unwrap();
    assert_eq!(
        updated,
        TodoItem {
            id: item.id,
            title: Some("binge watch Friends".to_string()),
            completed: false,
            sort_order: Some(1337),
        }
    );
}

#[tokio::test]
async fn null_order_clears_but_omitted_order_keeps() {
    let pool = test_pool().await;
    let item = TodoRepo::create(&pool, &new_todo("Learn a new skill", false, Some(32)))
        .await
        .unwrap();

    apply(&pool, item.id, r#"{"completed": true}"#).await;
    let kept = TodoRepo::find_by_id(&pool, item.id).await.unwrap().unwrap();
    assert_eq!(kept.sort_order, Some(32));
    assert!(kept.completed);

    apply(&pool, item.id, r#"{"order": null}"#).await;
    let cleared = TodoRepo::find_by_id(&pool, item.id).await.unwrap().unwrap();
    assert_eq!(cleared.sort_order, None);
    assert_eq!(cleared.title.as_deref(), Some("Learn a new skill"));
    assert!(cleared.completed);
}

#[tokio::test]
async fn update_all_fields_in_one_statement() {
    let pool = test_pool().await;
    let item = TodoRepo::create(&pool, &new_todo("old", false, None)).await.unwrap();

    apply(&pool, item.id, r#"{"title": null, "completed": true, "order": 9}"#).await;

    let updated = TodoRepo::find_by_id(&pool, item.id).await.unwrap().unwrap();
    assert_eq!(updated.title, None);
    assert!(updated.completed);
    assert_eq!(updated.sort_order, Some(9));
}

#[tokio::test]
async fn update_missing_id_affects_no_rows() {
    let pool = test_pool().await;
    assert_eq!(apply(&pool, 42, r#"{"completed": true}"#).await, 0);
}

#[tokio::test]
async fn empty_assignment_list_writes_nothing() {
    let pool = test_pool().await;
    let item = TodoRepo::create(&pool, &new_todo("x", false, None)).await.unwrap();

    let rows = TodoRepo::apply_update(&pool, item.id, &[]).await.unwrap();

    assert_eq!(rows, 0);
    assert_eq!(TodoRepo::find_by_id(&pool, item.id).await.unwrap(), Some(item));
}

// ---------------------------------------------------------------------------
// Deletes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_row_once() {
    let pool = test_pool().await;
    let item = TodoRepo::create(&pool, &new_todo("Brew a killer beer", true, Some(1)))
        .await
        .unwrap();

    assert!(TodoRepo::delete(&pool, item.id).await.unwrap());
    assert_eq!(TodoRepo::find_by_id(&pool, item.id).await.unwrap(), None);
    assert!(!TodoRepo::delete(&pool, item.id).await.unwrap());
}

#[tokio::test]
async fn delete_all_empties_table() {
    let pool = test_pool().await;
    for title in ["Get things done", "Make a todo item", "Brew a killer beer"] {
        TodoRepo::create(&pool, &new_todo(title, false, None)).await.unwrap();
    }

    assert_eq!(TodoRepo::delete_all(&pool).await.unwrap(), 3);
    assert!(TodoRepo::list(&pool).await.unwrap().is_empty());

    // Deleting from an empty table still succeeds.
    assert_eq!(TodoRepo::delete_all(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn health_check_passes_on_fresh_pool() {
    let pool = test_pool().await;
    todo_db::health_check(&pool).await.unwrap();
}

#[tokio::test]
async fn ensure_schema_is_idempotent() {
    let pool = test_pool().await;
    todo_db::ensure_schema(&pool).await.unwrap();
    TodoRepo::create(&pool, &new_todo("still works", false, None))
        .await
        .unwrap();
}
