use std::sync::Arc;

use axum::{
    Form, Router,
    extract::Path,
    response::{IntoResponse, Redirect, Response},
    routing::post,
};

use super::{
    forms::{TODO_TITLE, TodoTitleForm, validate_title},
    guards::{CurrentStore, parse_id},
    lists::{load_list, render_list},
};
use crate::{
    error::AppError,
    session::{Flash, Session},
    state::AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/lists/{list_id}/todos", post(create))
        .route("/lists/{list_id}/todos/{todo_id}/toggle", post(toggle))
        .route("/lists/{list_id}/todos/{todo_id}/destroy", post(destroy))
}

async fn create(
    session: Session,
    store: CurrentStore,
    Path(list_id): Path<String>,
    Form(form): Form<TodoTitleForm>,
) -> Result<Response, AppError> {
    let list = load_list(&*store, &list_id).await?;

    let title = match validate_title(&form.title, &TODO_TITLE) {
        Ok(title) => title,
        Err(message) => {
            session.flash(Flash::error(message)).await;
            let html = render_list(&session, &*store, list, form.title.trim().to_string()).await?;
            return Ok(html.into_response());
        }
    };

    if !store.create_todo(list.id, &title).await? {
        return Err(AppError::not_found());
    }
    session.flash(Flash::success("The todo has been created.")).await;
    Ok(Redirect::to(&format!("/lists/{}", list.id)).into_response())
}

async fn toggle(
    session: Session,
    store: CurrentStore,
    Path((list_id, todo_id)): Path<(String, String)>,
) -> Result<Redirect, AppError> {
    let list_id = parse_id(&list_id)?;
    let todo_id = parse_id(&todo_id)?;

    if !store.toggle_done_todo(list_id, todo_id).await? {
        return Err(AppError::not_found());
    }
    let todo = store
        .load_todo(list_id, todo_id)
        .await?
        .ok_or_else(AppError::not_found)?;

    let message = if todo.done {
        format!("\"{}\" marked done.", todo.title)
    } else {
        format!("\"{}\" marked as NOT done!", todo.title)
    };
    session.flash(Flash::success(message)).await;
    Ok(Redirect::to(&format!("/lists/{list_id}")))
}

async fn destroy(
    session: Session,
    store: CurrentStore,
    Path((list_id, todo_id)): Path<(String, String)>,
) -> Result<Redirect, AppError> {
    let list_id = parse_id(&list_id)?;
    let todo_id = parse_id(&todo_id)?;

    if !store.delete_todo(list_id, todo_id).await? {
        return Err(AppError::not_found());
    }
    session.flash(Flash::success("The todo has been deleted.")).await;
    Ok(Redirect::to(&format!("/lists/{list_id}")))
}
