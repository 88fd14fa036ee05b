use std::collections::HashMap;

use async_trait::async_trait;
use futures_util::future::try_join;
use sea_orm::{FromQueryResult, QueryResult};

use super::{
    StoreError, StoreResult, TodoStore,
    models::{ListId, Todo, TodoId, TodoList},
    sort,
};
use crate::{
    auth::password::verify_password,
    db::{
        entities::{todo, todo_list},
        executor::QueryExecutor,
    },
};

const ALL_LISTS: &str =
    "SELECT id, title, username FROM todolists WHERE username = $1 ORDER BY lower(title) ASC, id ASC";
const ALL_TODOS: &str =
    "SELECT id, todolist_id, title, done, username FROM todos WHERE username = $1 ORDER BY id ASC";
const ONE_LIST: &str = "SELECT id, title, username FROM todolists WHERE id = $1 AND username = $2";
const LIST_TODOS: &str = "SELECT id, todolist_id, title, done, username FROM todos \
     WHERE todolist_id = $1 AND username = $2 ORDER BY id ASC";
const SORTED_TODOS: &str = "SELECT id, todolist_id, title, done, username FROM todos \
     WHERE todolist_id = $1 AND username = $2 ORDER BY done ASC, lower(title) ASC, id ASC";
const ONE_TODO: &str = "SELECT id, todolist_id, title, done, username FROM todos \
     WHERE todolist_id = $1 AND id = $2 AND username = $3";
const INSERT_LIST: &str = "INSERT INTO todolists (title, username) VALUES ($1, $2)";
const INSERT_TODO: &str = "INSERT INTO todos (todolist_id, title, username) \
     SELECT id, $2, $3 FROM todolists WHERE id = $1 AND username = $3";
const DELETE_LIST: &str = "DELETE FROM todolists WHERE id = $1 AND username = $2";
const DELETE_TODO: &str = "DELETE FROM todos WHERE todolist_id = $1 AND id = $2 AND username = $3";
const TOGGLE_TODO: &str = "UPDATE todos SET done = NOT done \
     WHERE todolist_id = $1 AND id = $2 AND username = $3";
// `found` counts the list, not the updated todos, so an empty list still succeeds.
const COMPLETE_ALL: &str = "WITH list AS ( \
         SELECT id FROM todolists WHERE id = $1 AND username = $2 \
     ), updated AS ( \
         UPDATE todos SET done = TRUE \
         WHERE todolist_id IN (SELECT id FROM list) AND username = $2 \
     ) \
     SELECT count(*) AS found FROM list";
const RENAME_LIST: &str = "UPDATE todolists SET title = $2 WHERE id = $1 AND username = $3";
const TITLE_EXISTS: &str = "SELECT 1 FROM todolists WHERE title = $1 AND username = $2";
const FIND_PASSWORD: &str = "SELECT password FROM users WHERE username = $1";

/// Relational store; every statement is scoped to `username`.
pub struct PgStore {
    executor: QueryExecutor,
    username: String,
}

impl PgStore {
    pub fn new(executor: QueryExecutor, username: impl Into<String>) -> Self {
        Self {
            executor,
            username: username.into(),
        }
    }
}

fn decode_list(row: &QueryResult) -> StoreResult<TodoList> {
    let model = todo_list::Model::from_query_result(row, "")?;
    Ok(TodoList::new(model.id, model.title))
}

fn decode_todo(row: &QueryResult) -> StoreResult<(ListId, Todo)> {
    let model = todo::Model::from_query_result(row, "")?;
    Ok((
        model.todolist_id,
        Todo {
            id: model.id,
            title: model.title,
            done: model.done,
        },
    ))
}

fn decode_todos(rows: &[QueryResult]) -> StoreResult<Vec<Todo>> {
    rows.iter()
        .map(|row| decode_todo(row).map(|(_, todo)| todo))
        .collect()
}

#[async_trait]
impl TodoStore for PgStore {
    async fn sorted_todo_lists(&self) -> StoreResult<Vec<TodoList>> {
        let (list_rows, todo_rows) = try_join(
            self.executor
                .query_all(ALL_LISTS, vec![self.username.clone().into()]),
            self.executor
                .query_all(ALL_TODOS, vec![self.username.clone().into()]),
        )
        .await?;

        let mut todos_by_list: HashMap<ListId, Vec<Todo>> = HashMap::new();
        for row in &todo_rows {
            let (list_id, todo) = decode_todo(row)?;
            todos_by_list.entry(list_id).or_default().push(todo);
        }

        let mut lists = Vec::with_capacity(list_rows.len());
        for row in &list_rows {
            let mut list = decode_list(row)?;
            list.todos = todos_by_list.remove(&list.id).unwrap_or_default();
            lists.push(list);
        }

        // Rows already arrive ordered by lower(title); partitioning keeps that order.
        let (mut undone, mut done) = sort::split_todo_lists(lists);
        undone.append(&mut done);
        Ok(undone)
    }

    async fn sorted_todos(&self, list: &TodoList) -> StoreResult<Vec<Todo>> {
        let rows = self
            .executor
            .query_all(SORTED_TODOS, vec![list.id.into(), self.username.clone().into()])
            .await?;
        decode_todos(&rows)
    }

    async fn load_todo_list(&self, list_id: ListId) -> StoreResult<Option<TodoList>> {
        let (list_row, todo_rows) = try_join(
            self.executor
                .query_one(ONE_LIST, vec![list_id.into(), self.username.clone().into()]),
            self.executor
                .query_all(LIST_TODOS, vec![list_id.into(), self.username.clone().into()]),
        )
        .await?;

        let Some(row) = list_row else {
            return Ok(None);
        };
        let mut list = decode_list(&row)?;
        list.todos = decode_todos(&todo_rows)?;
        Ok(Some(list))
    }

    async fn load_todo(&self, list_id: ListId, todo_id: TodoId) -> StoreResult<Option<Todo>> {
        let row = self
            .executor
            .query_one(
                ONE_TODO,
                vec![list_id.into(), todo_id.into(), self.username.clone().into()],
            )
            .await?;
        row.as_ref()
            .map(|row| decode_todo(row).map(|(_, todo)| todo))
            .transpose()
    }

    async fn create_todo_list(&self, title: &str) -> StoreResult<bool> {
        let result = self
            .executor
            .execute(INSERT_LIST, vec![title.into(), self.username.clone().into()])
            .await
            .map_err(StoreError::from);
        match result {
            Ok(affected) => Ok(affected > 0),
            Err(err) if err.is_unique_violation() => Ok(false),
            Err(err) => Err(err),
        }
    }

    async fn create_todo(&self, list_id: ListId, title: &str) -> StoreResult<bool> {
        let affected = self
            .executor
            .execute(
                INSERT_TODO,
                vec![list_id.into(), title.into(), self.username.clone().into()],
            )
            .await?;
        Ok(affected > 0)
    }

    async fn delete_todo_list(&self, list_id: ListId) -> StoreResult<bool> {
        let affected = self
            .executor
            .execute(DELETE_LIST, vec![list_id.into(), self.username.clone().into()])
            .await?;
        Ok(affected > 0)
    }

    async fn delete_todo(&self, list_id: ListId, todo_id: TodoId) -> StoreResult<bool> {
        let affected = self
            .executor
            .execute(
                DELETE_TODO,
                vec![list_id.into(), todo_id.into(), self.username.clone().into()],
            )
            .await?;
        Ok(affected > 0)
    }

    async fn toggle_done_todo(&self, list_id: ListId, todo_id: TodoId) -> StoreResult<bool> {
        let affected = self
            .executor
            .execute(
                TOGGLE_TODO,
                vec![list_id.into(), todo_id.into(), self.username.clone().into()],
            )
            .await?;
        Ok(affected > 0)
    }

    async fn complete_all_todos(&self, list_id: ListId) -> StoreResult<bool> {
        let row = self
            .executor
            .query_one(COMPLETE_ALL, vec![list_id.into(), self.username.clone().into()])
            .await?;
        let found = match row {
            Some(row) => row.try_get::<i64>("", "found")?,
            None => 0,
        };
        Ok(found > 0)
    }

    async fn set_todo_list_title(&self, list_id: ListId, title: &str) -> StoreResult<bool> {
        let result = self
            .executor
            .execute(
                RENAME_LIST,
                vec![list_id.into(), title.into(), self.username.clone().into()],
            )
            .await
            .map_err(StoreError::from);
        match result {
            Ok(affected) => Ok(affected > 0),
            Err(err) if err.is_unique_violation() => Ok(false),
            Err(err) => Err(err),
        }
    }

    async fn exists_todo_list_title(&self, title: &str) -> StoreResult<bool> {
        let row = self
            .executor
            .query_one(TITLE_EXISTS, vec![title.into(), self.username.clone().into()])
            .await?;
        Ok(row.is_some())
    }

    async fn authenticate(&self, username: &str, password: &str) -> StoreResult<bool> {
        let Some(row) = self
            .executor
            .query_one(FIND_PASSWORD, vec![username.into()])
            .await?
        else {
            return Ok(false);
        };
        let hash: String = row.try_get("", "password")?;

        match verify_password(password, &hash) {
            Ok(matched) => Ok(matched),
            Err(err) => {
                tracing::warn!(username, error = %err, "unusable password hash");
                Ok(false)
            }
        }
    }
}
