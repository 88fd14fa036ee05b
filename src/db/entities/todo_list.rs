use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "todolists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique_key = "owner_title")]
    pub title: String,
    #[sea_orm(unique_key = "owner_title")]
    pub username: String,
    #[sea_orm(belongs_to, from = "username", to = "username", on_delete = "Cascade")]
    pub owner: HasOne<super::user::Entity>,
    #[sea_orm(has_many)]
    pub todos: HasMany<super::todo::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
