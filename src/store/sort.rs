//! Ordering shared by both stores: undone entries first, then done ones, each
//! group by case-insensitive title.

use super::models::{Todo, TodoList};

pub trait Titled {
    fn title(&self) -> &str;
}

impl Titled for TodoList {
    fn title(&self) -> &str {
        &self.title
    }
}

impl Titled for Todo {
    fn title(&self) -> &str {
        &self.title
    }
}

/// Sorts both partitions by lowercased title and concatenates them, undone
/// first. The sort is stable, so equal titles keep their input order.
pub fn partitioned<T: Titled>(mut undone: Vec<T>, mut done: Vec<T>) -> Vec<T> {
    sort_by_title(&mut undone);
    sort_by_title(&mut done);
    undone.append(&mut done);
    undone
}

/// Splits `lists` by completion without reordering within each half.
pub fn split_todo_lists(lists: Vec<TodoList>) -> (Vec<TodoList>, Vec<TodoList>) {
    lists.into_iter().partition(|list| !list.is_done())
}

pub fn sort_todo_lists(lists: Vec<TodoList>) -> Vec<TodoList> {
    let (undone, done) = split_todo_lists(lists);
    partitioned(undone, done)
}

pub fn sort_todos(todos: Vec<Todo>) -> Vec<Todo> {
    let (undone, done): (Vec<Todo>, Vec<Todo>) = todos.into_iter().partition(|todo| !todo.done);
    partitioned(undone, done)
}

fn sort_by_title<T: Titled>(items: &mut [T]) {
    items.sort_by_cached_key(|item| item.title().to_lowercase());
}
