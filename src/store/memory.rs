use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::{
    StoreResult, TodoStore,
    credentials::Credentials,
    ids::IdGenerator,
    models::{ListId, Todo, TodoId, TodoList},
    seed::seed_collection,
    sort,
};

/// Everything one session owns when the in-memory store is active.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoCollection {
    pub lists: Vec<TodoList>,
    pub ids: IdGenerator,
}

impl TodoCollection {
    fn find_list(&self, list_id: ListId) -> Option<&TodoList> {
        self.lists.iter().find(|list| list.id == list_id)
    }

    fn find_list_mut(&mut self, list_id: ListId) -> Option<&mut TodoList> {
        self.lists.iter_mut().find(|list| list.id == list_id)
    }

    fn find_todo_mut(&mut self, list_id: ListId, todo_id: TodoId) -> Option<&mut Todo> {
        self.find_list_mut(list_id)?.find_todo_mut(todo_id)
    }

    /// Whether a list other than `except` is already called `title`.
    fn title_taken(&self, title: &str, except: Option<ListId>) -> bool {
        self.lists
            .iter()
            .any(|list| list.title == title && Some(list.id) != except)
    }
}

/// Per-session slot; `None` until the session first touches its lists.
pub type TodoSlot = Arc<Mutex<Option<TodoCollection>>>;

/// Store backed by the lists kept inside one session.
pub struct MemoryStore {
    slot: TodoSlot,
    credentials: Arc<Credentials>,
}

impl MemoryStore {
    pub fn new(slot: TodoSlot, credentials: Arc<Credentials>) -> Self {
        Self { slot, credentials }
    }

    async fn with_collection<R>(&self, f: impl FnOnce(&mut TodoCollection) -> R) -> R {
        let mut guard = self.slot.lock().await;
        let collection = guard.get_or_insert_with(seed_collection);
        f(collection)
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn sorted_todo_lists(&self) -> StoreResult<Vec<TodoList>> {
        let lists = self.with_collection(|c| c.lists.clone()).await;
        Ok(sort::sort_todo_lists(lists))
    }

    async fn sorted_todos(&self, list: &TodoList) -> StoreResult<Vec<Todo>> {
        Ok(sort::sort_todos(list.todos.clone()))
    }

    async fn load_todo_list(&self, list_id: ListId) -> StoreResult<Option<TodoList>> {
        Ok(self
            .with_collection(|c| c.find_list(list_id).cloned())
            .await)
    }

    async fn load_todo(&self, list_id: ListId, todo_id: TodoId) -> StoreResult<Option<Todo>> {
        Ok(self
            .with_collection(|c| {
                c.find_list(list_id)
                    .and_then(|list| list.find_todo(todo_id))
                    .cloned()
            })
            .await)
    }

    async fn create_todo_list(&self, title: &str) -> StoreResult<bool> {
        Ok(self
            .with_collection(|c| {
                if c.title_taken(title, None) {
                    return false;
                }
                let id = c.ids.next_id();
                c.lists.push(TodoList::new(id, title));
                true
            })
            .await)
    }

    async fn create_todo(&self, list_id: ListId, title: &str) -> StoreResult<bool> {
        Ok(self
            .with_collection(|TodoCollection { lists, ids }| {
                let Some(list) = lists.iter_mut().find(|list| list.id == list_id) else {
                    return false;
                };
                list.todos.push(Todo::new(ids.next_id(), title));
                true
            })
            .await)
    }

    async fn delete_todo_list(&self, list_id: ListId) -> StoreResult<bool> {
        Ok(self
            .with_collection(|c| {
                let Some(index) = c.lists.iter().position(|list| list.id == list_id) else {
                    return false;
                };
                c.lists.remove(index);
                true
            })
            .await)
    }

    async fn delete_todo(&self, list_id: ListId, todo_id: TodoId) -> StoreResult<bool> {
        Ok(self
            .with_collection(|c| {
                c.find_list_mut(list_id)
                    .and_then(|list| list.remove_todo(todo_id))
                    .is_some()
            })
            .await)
    }

    async fn toggle_done_todo(&self, list_id: ListId, todo_id: TodoId) -> StoreResult<bool> {
        Ok(self
            .with_collection(|c| match c.find_todo_mut(list_id, todo_id) {
                Some(todo) => {
                    todo.done = !todo.done;
                    true
                }
                None => false,
            })
            .await)
    }

    async fn complete_all_todos(&self, list_id: ListId) -> StoreResult<bool> {
        Ok(self
            .with_collection(|c| match c.find_list_mut(list_id) {
                Some(list) => {
                    list.todos.iter_mut().for_each(|todo| todo.done = true);
                    true
                }
                None => false,
            })
            .await)
    }

    async fn set_todo_list_title(&self, list_id: ListId, title: &str) -> StoreResult<bool> {
        Ok(self
            .with_collection(|c| {
                if c.title_taken(title, Some(list_id)) {
                    return false;
                }
                match c.find_list_mut(list_id) {
                    Some(list) => {
                        list.title = title.to_string();
                        true
                    }
                    None => false,
                }
            })
            .await)
    }

    async fn exists_todo_list_title(&self, title: &str) -> StoreResult<bool> {
        Ok(self
            .with_collection(|c| c.title_taken(title, None))
            .await)
    }

    async fn authenticate(&self, username: &str, password: &str) -> StoreResult<bool> {
        Ok(self.credentials.verify(username, password))
    }
}
