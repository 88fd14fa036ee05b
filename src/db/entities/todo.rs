use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub todolist_id: i32,
    pub title: String,
    #[sea_orm(default_value = false)]
    pub done: bool,
    pub username: String,
    #[sea_orm(belongs_to, from = "todolist_id", to = "id", on_delete = "Cascade")]
    pub todo_list: HasOne<super::todo_list::Entity>,
    #[sea_orm(belongs_to, from = "username", to = "username")]
    pub owner: HasOne<super::user::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
