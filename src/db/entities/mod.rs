#[allow(unused_imports)]
pub mod prelude {
    pub use super::todo::Entity as Todo;
    pub use super::todo_list::Entity as TodoList;
    pub use super::user::Entity as User;
}

pub mod todo;
pub mod todo_list;
pub mod user;
