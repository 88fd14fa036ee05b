use askama::Template;
use axum::response::Html;

use crate::{
    error::AppError,
    session::{Flash, Session},
    store::{ListId, Todo, TodoList},
};

/// Data every page layout needs.
pub struct PageContext {
    pub flashes: Vec<Flash>,
    pub username: Option<String>,
    pub signed_in: bool,
}

impl PageContext {
    /// Consumes the session's pending flashes.
    pub async fn take(session: &Session) -> Self {
        Self {
            flashes: session.take_flashes().await,
            username: session.username().await,
            signed_in: session.is_signed_in().await,
        }
    }
}

pub struct ListSummary {
    pub id: ListId,
    pub title: String,
    pub done: bool,
    pub todo_count: usize,
    pub remaining: usize,
}

impl From<&TodoList> for ListSummary {
    fn from(list: &TodoList) -> Self {
        Self {
            id: list.id,
            title: list.title.clone(),
            done: list.is_done(),
            todo_count: list.todos.len(),
            remaining: list.todos.len() - list.done_count(),
        }
    }
}

#[derive(Template)]
#[template(path = "lists.html")]
pub struct ListsTemplate {
    pub page: PageContext,
    pub lists: Vec<ListSummary>,
}

#[derive(Template)]
#[template(path = "new_list.html")]
pub struct NewListTemplate {
    pub page: PageContext,
    pub title: String,
}

#[derive(Template)]
#[template(path = "list.html")]
pub struct ListTemplate {
    pub page: PageContext,
    pub list_id: ListId,
    pub title: String,
    pub is_done: bool,
    pub has_undone: bool,
    pub todos: Vec<Todo>,
    pub todo_title: String,
}

#[derive(Template)]
#[template(path = "edit_list.html")]
pub struct EditListTemplate {
    pub page: PageContext,
    pub list_id: ListId,
    pub current_title: String,
    pub title: String,
}

#[derive(Template)]
#[template(path = "signin.html")]
pub struct SigninTemplate {
    pub page: PageContext,
    pub username: String,
}

pub fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}
