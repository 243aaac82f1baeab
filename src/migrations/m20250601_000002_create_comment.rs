use sea_orm_migration::prelude::*;

use super::m20250601_000001_create_todo_item::TodoItem;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Comment::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Comment::Message).string_len(250).not_null())
                    .col(ColumnDef::new(Comment::TodoId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_todo_id")
                            .from(Comment::Table, Comment::TodoId)
                            .to(TodoItem::Table, TodoItem::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Comment {
    Table,
    Id,
    Message,
    TodoId,
}
