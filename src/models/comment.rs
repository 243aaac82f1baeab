//! `comment` entity
//!
//! A comment is bound to exactly one todo item at creation and is never
//! mutated or reassigned afterwards.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub message: String,
    pub todo_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::todo_item::Entity",
        from = "Column::TodoId",
        to = "super::todo_item::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    TodoItem,
}

impl Related<super::todo_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TodoItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
