use std::sync::Arc;

use axum::{
    Form, Router,
    extract::Path,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};

use super::{
    forms::{LIST_TITLE, ListTitleForm, UNIQUE_LIST_TITLE, validate_title},
    guards::{CurrentStore, parse_id},
    views::{
        EditListTemplate, ListSummary, ListTemplate, ListsTemplate, NewListTemplate, PageContext,
        render,
    },
};
use crate::{
    error::AppError,
    session::{Flash, Session},
    state::AppState,
    store::{ListId, TodoList, TodoStore},
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/lists", get(index).post(create))
        .route("/lists/new", get(new_form))
        .route("/lists/{list_id}", get(show))
        .route("/lists/{list_id}/edit", get(edit_form).post(update))
        .route("/lists/{list_id}/destroy", post(destroy))
        .route("/lists/{list_id}/complete_all", post(complete_all))
}

async fn index(session: Session, store: CurrentStore) -> Result<Html<String>, AppError> {
    let lists = store.sorted_todo_lists().await?;
    render(&ListsTemplate {
        lists: lists.iter().map(ListSummary::from).collect(),
        page: PageContext::take(&session).await,
    })
}

async fn new_form(session: Session) -> Result<Html<String>, AppError> {
    render_new_list(&session, String::new()).await
}

async fn create(
    session: Session,
    store: CurrentStore,
    Form(form): Form<ListTitleForm>,
) -> Result<Response, AppError> {
    let title = match validate_title(&form.title, &LIST_TITLE) {
        Ok(title) => title,
        Err(message) => {
            session.flash(Flash::error(message)).await;
            let html = render_new_list(&session, form.title.trim().to_string()).await?;
            return Ok(html.into_response());
        }
    };

    if store.exists_todo_list_title(&title).await? || !store.create_todo_list(&title).await? {
        session.flash(Flash::error(UNIQUE_LIST_TITLE)).await;
        return Ok(render_new_list(&session, title).await?.into_response());
    }

    session
        .flash(Flash::success("The todo list has been created."))
        .await;
    Ok(Redirect::to("/lists").into_response())
}

async fn show(
    session: Session,
    store: CurrentStore,
    Path(list_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let list = load_list(&*store, &list_id).await?;
    render_list(&session, &*store, list, String::new()).await
}

async fn edit_form(
    session: Session,
    store: CurrentStore,
    Path(list_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let list = load_list(&*store, &list_id).await?;
    let title = list.title.clone();
    render_edit_list(&session, list, title).await
}

async fn update(
    session: Session,
    store: CurrentStore,
    Path(list_id): Path<String>,
    Form(form): Form<ListTitleForm>,
) -> Result<Response, AppError> {
    let list_id = parse_id(&list_id)?;

    let title = match validate_title(&form.title, &LIST_TITLE) {
        Ok(title) => title,
        Err(message) => {
            session.flash(Flash::error(message)).await;
            return rerender_edit(&session, &*store, list_id, form.title.trim()).await;
        }
    };

    if store.exists_todo_list_title(&title).await? {
        session.flash(Flash::error(UNIQUE_LIST_TITLE)).await;
        return rerender_edit(&session, &*store, list_id, &title).await;
    }

    match store.set_todo_list_title(list_id, &title).await {
        Ok(true) => {
            session.flash(Flash::success("Todo list updated.")).await;
            Ok(Redirect::to(&format!("/lists/{list_id}")).into_response())
        }
        Ok(false) => {
            // another list took the title after the check above
            if store.load_todo_list(list_id).await?.is_none() {
                return Err(AppError::not_found());
            }
            session.flash(Flash::error(UNIQUE_LIST_TITLE)).await;
            rerender_edit(&session, &*store, list_id, &title).await
        }
        Err(err) if err.is_unique_violation() => {
            session.flash(Flash::error(UNIQUE_LIST_TITLE)).await;
            rerender_edit(&session, &*store, list_id, &title).await
        }
        Err(err) => Err(err.into()),
    }
}

async fn destroy(
    session: Session,
    store: CurrentStore,
    Path(list_id): Path<String>,
) -> Result<Redirect, AppError> {
    let list_id = parse_id(&list_id)?;
    if !store.delete_todo_list(list_id).await? {
        return Err(AppError::not_found());
    }
    session.flash(Flash::success("Todo list deleted.")).await;
    Ok(Redirect::to("/lists"))
}

async fn complete_all(
    session: Session,
    store: CurrentStore,
    Path(list_id): Path<String>,
) -> Result<Redirect, AppError> {
    let list_id = parse_id(&list_id)?;
    if !store.complete_all_todos(list_id).await? {
        return Err(AppError::not_found());
    }
    session
        .flash(Flash::success("All todos have been marked as done."))
        .await;
    Ok(Redirect::to(&format!("/lists/{list_id}")))
}

/// Loads a list by its raw path id; malformed and unknown ids are both 404.
pub(super) async fn load_list(store: &dyn TodoStore, raw_id: &str) -> Result<TodoList, AppError> {
    let list_id = parse_id(raw_id)?;
    store
        .load_todo_list(list_id)
        .await?
        .ok_or_else(AppError::not_found)
}

pub(super) async fn render_list(
    session: &Session,
    store: &dyn TodoStore,
    list: TodoList,
    todo_title: String,
) -> Result<Html<String>, AppError> {
    let todos = store.sorted_todos(&list).await?;
    render(&ListTemplate {
        is_done: store.is_done_todo_list(&list),
        has_undone: store.has_undone_todos(&list),
        list_id: list.id,
        title: list.title,
        todos,
        todo_title,
        page: PageContext::take(session).await,
    })
}

async fn render_new_list(session: &Session, title: String) -> Result<Html<String>, AppError> {
    render(&NewListTemplate {
        page: PageContext::take(session).await,
        title,
    })
}

async fn render_edit_list(
    session: &Session,
    list: TodoList,
    title: String,
) -> Result<Html<String>, AppError> {
    render(&EditListTemplate {
        page: PageContext::take(session).await,
        list_id: list.id,
        current_title: list.title,
        title,
    })
}

async fn rerender_edit(
    session: &Session,
    store: &dyn TodoStore,
    list_id: ListId,
    title: &str,
) -> Result<Response, AppError> {
    let list = store
        .load_todo_list(list_id)
        .await?
        .ok_or_else(AppError::not_found)?;
    Ok(render_edit_list(session, list, title.to_string())
        .await?
        .into_response())
}
