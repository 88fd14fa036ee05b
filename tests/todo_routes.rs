use axum::http::StatusCode;

mod common;

use common::{Browser, body_text, location};

// A fresh session starts from the seed lists, whose ids run up to 12, so the
// first list created in a test gets id 13 and its first todo id 14.
const FIRST_NEW_ID: i32 = 13;

async fn signed_in() -> Browser {
    let mut browser = Browser::new();
    browser.sign_in().await;
    browser
}

#[tokio::test]
async fn lists_page_shows_seeded_lists() {
    let mut browser = signed_in().await;

    let res = browser.get("/lists").await;

    assert_eq!(res.status(), StatusCode::OK);
    let html = body_text(res).await;
    assert!(html.contains("Work Todos"));
    assert!(html.contains("Home Todos"));
}

#[tokio::test]
async fn done_lists_are_listed_after_undone_ones() {
    let mut browser = signed_in().await;

    let html = body_text(browser.get("/lists").await).await;

    // "Home Todos" is fully done; "Additional Todos" is empty and counts as undone.
    let additional = html.find("Additional Todos").expect("empty list shown");
    let work = html.find("Work Todos").expect("undone list shown");
    let home = html.find("Home Todos").expect("done list shown");
    assert!(additional < home);
    assert!(work < home);
}

#[tokio::test]
async fn create_list_redirects_with_success_flash() {
    let mut browser = signed_in().await;

    let res = browser
        .post_form("/lists", "todoListTitle=++Groceries++")
        .await;
    assert!(res.status().is_redirection());
    assert_eq!(location(&res), "/lists");

    let html = body_text(browser.get("/lists").await).await;
    assert!(html.contains("The todo list has been created."));
    assert!(html.contains(&format!("/lists/{FIRST_NEW_ID}")));
    assert!(html.contains("Groceries"));
}

#[tokio::test]
async fn create_list_rejects_duplicates_and_bad_titles() {
    let mut browser = signed_in().await;

    let res = browser.post_form("/lists", "todoListTitle=Work+Todos").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("The list title must be unique."));

    let res = browser.post_form("/lists", "todoListTitle=+++").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("The list title is required."));

    let long = "x".repeat(101);
    let res = browser
        .post_form("/lists", &format!("todoListTitle={long}"))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let html = body_text(res).await;
    assert!(html.contains("List title must be between 1 and 100 characters."));
    assert!(html.contains(&long), "input is kept for correction");
}

#[tokio::test]
async fn groceries_flow_sorts_done_todos_last() {
    let mut browser = signed_in().await;
    browser.post_form("/lists", "todoListTitle=Groceries").await;
    let list = format!("/lists/{FIRST_NEW_ID}");

    let res = browser
        .post_form(&format!("{list}/todos"), "todoTitle=Milk")
        .await;
    assert_eq!(location(&res), list);
    browser
        .post_form(&format!("{list}/todos"), "todoTitle=Eggs")
        .await;

    let milk = FIRST_NEW_ID + 1;
    let res = browser
        .post_form(&format!("{list}/todos/{milk}/toggle"), "")
        .await;
    assert_eq!(location(&res), list);

    let html = body_text(browser.get(&list).await).await;
    assert!(html.contains("marked done."));
    let eggs_at = html.find("<h3>Eggs</h3>").expect("eggs listed");
    let milk_at = html.find("<h3>Milk</h3>").expect("milk listed");
    assert!(eggs_at < milk_at);

    browser
        .post_form(&format!("{list}/todos/{milk}/toggle"), "")
        .await;
    let html = body_text(browser.get(&list).await).await;
    assert!(html.contains("marked as NOT done!"));
}

#[tokio::test]
async fn invalid_todo_title_rerenders_list() {
    let mut browser = signed_in().await;

    let res = browser.post_form("/lists/1/todos", "todoTitle=").await;

    assert_eq!(res.status(), StatusCode::OK);
    let html = body_text(res).await;
    assert!(html.contains("The todo title is required."));
    assert!(html.contains("Work Todos"));
}

#[tokio::test]
async fn complete_all_marks_every_todo_done() {
    let mut browser = signed_in().await;

    let res = browser.post_form("/lists/1/complete_all", "").await;
    assert_eq!(location(&res), "/lists/1");

    let html = body_text(browser.get("/lists/1").await).await;
    assert!(html.contains("All todos have been marked as done."));
    assert!(!html.contains("Complete All"));
}

#[tokio::test]
async fn delete_todo_requires_matching_list() {
    let mut browser = signed_in().await;

    // todo 2 belongs to list 1
    let res = browser.post_form("/lists/5/todos/2/destroy", "").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = browser.post_form("/lists/1/todos/2/destroy", "").await;
    assert_eq!(location(&res), "/lists/1");
    let html = body_text(browser.get("/lists/1").await).await;
    assert!(html.contains("The todo has been deleted."));
    assert!(!html.contains("Get coffee"));
}

#[tokio::test]
async fn edit_list_renames_and_checks_uniqueness() {
    let mut browser = signed_in().await;

    let res = browser
        .post_form("/lists/10/edit", "todoListTitle=Home+Todos")
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("The list title must be unique."));

    let res = browser
        .post_form("/lists/10/edit", "todoListTitle=Extras")
        .await;
    assert_eq!(location(&res), "/lists/10");
    let html = body_text(browser.get("/lists/10").await).await;
    assert!(html.contains("Todo list updated."));
    assert!(html.contains("Extras"));
}

#[tokio::test]
async fn delete_list_then_it_is_gone() {
    let mut browser = signed_in().await;

    let res = browser.post_form("/lists/10/destroy", "").await;
    assert_eq!(location(&res), "/lists");

    let res = browser.get("/lists/10").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(res).await, "Not Found.");
}

#[tokio::test]
async fn malformed_and_unknown_ids_are_not_found() {
    let mut browser = signed_in().await;

    for uri in ["/lists/abc", "/lists/999", "/lists/abc/edit"] {
        let res = browser.get(uri).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{uri}");
    }
    let res = browser.post_form("/lists/1/todos/999/toggle", "").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let res = browser.post_form("/lists/999/complete_all", "").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn sessions_do_not_share_lists() {
    let mut alice = signed_in().await;
    let mut bob = signed_in().await;

    alice.post_form("/lists", "todoListTitle=Private").await;

    let html = body_text(bob.get("/lists").await).await;
    assert!(!html.contains("Private"));
}

#[tokio::test]
async fn stylesheet_is_served_publicly() {
    let mut browser = Browser::new();

    let res = browser.get("/stylesheets/app.css").await;

    assert_eq!(res.status(), StatusCode::OK);
}
