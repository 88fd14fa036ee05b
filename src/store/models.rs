use serde::{Deserialize, Serialize};

pub type ListId = i32;
pub type TodoId = i32;

/// A named list of todos owned by one user.
///
/// Values are plain owned data, so `clone()` yields a fully detached copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: ListId,
    pub title: String,
    pub todos: Vec<Todo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
}

impl TodoList {
    pub fn new(id: ListId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            todos: Vec::new(),
        }
    }

    /// Done iff the list has at least one todo and every todo is done.
    pub fn is_done(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(|todo| todo.done)
    }

    pub fn has_undone_todos(&self) -> bool {
        self.todos.iter().any(|todo| !todo.done)
    }

    pub fn done_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.done).count()
    }

    pub fn find_todo(&self, todo_id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == todo_id)
    }

    pub fn find_todo_mut(&mut self, todo_id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == todo_id)
    }

    /// Removes the todo with `todo_id`, returning it if it was present.
    pub fn remove_todo(&mut self, todo_id: TodoId) -> Option<Todo> {
        let index = self.todos.iter().position(|todo| todo.id == todo_id)?;
        Some(self.todos.remove(index))
    }
}

impl Todo {
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }
}
