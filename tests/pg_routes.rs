use std::collections::BTreeMap;

use axum::http::StatusCode;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};

use todo_lists::{
    auth::hash_password,
    db::entities::{todo, todo_list},
    routes::router,
    test_helpers::{TEST_PASSWORD, mock_pg_state},
};

mod common;

use common::{Browser, body_text, location};

fn password_row() -> BTreeMap<&'static str, Value> {
    let hash = hash_password(TEST_PASSWORD).unwrap();
    BTreeMap::from([("password", Value::from(hash))])
}

fn list_row(id: i32, title: &str) -> todo_list::Model {
    todo_list::Model {
        id,
        title: title.to_string(),
        username: "admin".to_string(),
    }
}

fn todo_row(id: i32, list_id: i32, title: &str, done: bool) -> todo::Model {
    todo::Model {
        id,
        todolist_id: list_id,
        title: title.to_string(),
        done,
        username: "admin".to_string(),
    }
}

#[tokio::test]
async fn signs_in_and_lists_against_postgres_backend() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![password_row()]])
        .append_query_results([vec![list_row(1, "Groceries"), list_row(2, "Work")]])
        .append_query_results([vec![
            todo_row(3, 1, "Milk", false),
            todo_row(4, 2, "Report", true),
        ]])
        .into_connection();
    let mut browser = Browser::with_router(router(mock_pg_state(db)));

    browser.sign_in().await;
    let res = browser.get("/lists").await;

    assert_eq!(res.status(), StatusCode::OK);
    let html = body_text(res).await;
    let groceries = html.find("Groceries").expect("groceries listed");
    let work = html.find("Work").expect("work listed");
    assert!(groceries < work);
}

#[tokio::test]
async fn duplicate_title_check_uses_the_database() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![password_row()]])
        .append_query_results([vec![BTreeMap::from([("?column?", Value::from(1i32))])]])
        .into_connection();
    let mut browser = Browser::with_router(router(mock_pg_state(db)));

    browser.sign_in().await;
    let res = browser.post_form("/lists", "todoListTitle=Groceries").await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("The list title must be unique."));
}

#[tokio::test]
async fn unowned_list_toggle_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![password_row()]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();
    let mut browser = Browser::with_router(router(mock_pg_state(db)));

    browser.sign_in().await;
    let res = browser.post_form("/lists/7/todos/8/toggle", "").await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_ne!(location(&res), "/users/signin");
}
