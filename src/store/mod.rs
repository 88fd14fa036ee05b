//! Persistence for todo lists.
//!
//! Handlers talk to a [`TodoStore`] trait object bound to the signed-in user.
//! [`StoreBackend`] decides which implementation serves a request: the
//! in-memory store keeps every list inside the caller's session, the Postgres
//! store scopes every statement by username.

mod credentials;
mod error;
pub mod ids;
pub mod memory;
pub mod models;
pub mod postgres;
mod seed;
pub mod sort;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use credentials::Credentials;
pub use error::{StoreError, StoreResult};
pub use memory::{MemoryStore, TodoCollection, TodoSlot};
pub use models::{ListId, Todo, TodoId, TodoList};
pub use postgres::PgStore;

use crate::{db::executor::QueryExecutor, session::Session};

/// Operations available to the web layer.
///
/// Not-found and duplicate-title outcomes are `Ok(false)` / `Ok(None)`;
/// `Err` is reserved for failures the caller cannot recover from.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Every list of the current user, undone lists first, each group by
    /// case-insensitive title.
    async fn sorted_todo_lists(&self) -> StoreResult<Vec<TodoList>>;

    /// Todos of `list`, undone first, each group by case-insensitive title.
    async fn sorted_todos(&self, list: &TodoList) -> StoreResult<Vec<Todo>>;

    async fn load_todo_list(&self, list_id: ListId) -> StoreResult<Option<TodoList>>;

    async fn load_todo(&self, list_id: ListId, todo_id: TodoId) -> StoreResult<Option<Todo>>;

    /// `Ok(false)` when the user already owns a list called `title`.
    async fn create_todo_list(&self, title: &str) -> StoreResult<bool>;

    async fn create_todo(&self, list_id: ListId, title: &str) -> StoreResult<bool>;

    /// Removes the list together with all of its todos.
    async fn delete_todo_list(&self, list_id: ListId) -> StoreResult<bool>;

    async fn delete_todo(&self, list_id: ListId, todo_id: TodoId) -> StoreResult<bool>;

    async fn toggle_done_todo(&self, list_id: ListId, todo_id: TodoId) -> StoreResult<bool>;

    /// Marks every todo done. Succeeds for an existing list without todos.
    async fn complete_all_todos(&self, list_id: ListId) -> StoreResult<bool>;

    async fn set_todo_list_title(&self, list_id: ListId, title: &str) -> StoreResult<bool>;

    async fn exists_todo_list_title(&self, title: &str) -> StoreResult<bool>;

    /// A missing user and a wrong password are both `Ok(false)`.
    async fn authenticate(&self, username: &str, password: &str) -> StoreResult<bool>;

    fn is_done_todo_list(&self, list: &TodoList) -> bool {
        list.is_done()
    }

    fn has_undone_todos(&self, list: &TodoList) -> bool {
        list.has_undone_todos()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Memory,
    Postgres,
}

impl StoreKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreKind::Memory => "memory",
            StoreKind::Postgres => "postgres",
        }
    }
}

impl std::str::FromStr for StoreKind {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "postgres" => Ok(StoreKind::Postgres),
            other => Err(format!("unsupported store kind: {other}")),
        }
    }
}

/// Process-wide choice of store, cheap to clone into request handlers.
#[derive(Clone)]
pub enum StoreBackend {
    Memory { credentials: Arc<Credentials> },
    Postgres { executor: QueryExecutor },
}

impl StoreBackend {
    pub fn memory(credentials: Credentials) -> Self {
        StoreBackend::Memory {
            credentials: Arc::new(credentials),
        }
    }

    pub fn postgres(executor: QueryExecutor) -> Self {
        StoreBackend::Postgres { executor }
    }

    pub fn kind(&self) -> StoreKind {
        match self {
            StoreBackend::Memory { .. } => StoreKind::Memory,
            StoreBackend::Postgres { .. } => StoreKind::Postgres,
        }
    }

    /// Opens a store bound to the user signed into `session`.
    pub async fn open(&self, session: &Session) -> Box<dyn TodoStore> {
        match self {
            StoreBackend::Memory { credentials } => Box::new(MemoryStore::new(
                session.todo_slot(),
                Arc::clone(credentials),
            )),
            StoreBackend::Postgres { executor } => {
                let username = session.username().await.unwrap_or_default();
                Box::new(PgStore::new(executor.clone(), username))
            }
        }
    }
}
