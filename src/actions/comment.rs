//! Comment store operations
//!
//! Comments are created against a live parent and never mutated; they go
//! away only when their todo is deleted.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use validator::Validate;

use crate::error::ApiError;
use crate::models::{comment, todo_item};
use crate::requests::CreateCommentRequest;

/// Add a comment to an existing todo item
///
/// The parent is looked up first; an unknown `todo_id` is a NotFound
/// error regardless of the payload.
pub async fn add_comment(
    db: &DatabaseConnection,
    todo_id: i32,
    payload: CreateCommentRequest,
) -> Result<comment::Model, ApiError> {
    let todo = todo_item::Entity::find_by_id(todo_id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound { resource: "Todo" })?;

    let message = match payload.message.as_deref() {
        Some(m) if !m.trim().is_empty() => m.to_owned(),
        _ => return Err(ApiError::validation("Message is required")),
    };
    payload.validate().map_err(ApiError::from_validator)?;

    let new_comment = comment::ActiveModel {
        message: Set(message),
        todo_id: Set(todo.id),
        ..Default::default()
    };
    Ok(new_comment.insert(db).await?)
}

/// Comments belonging to one todo, oldest first
pub async fn for_todo(
    db: &DatabaseConnection,
    todo_id: i32,
) -> Result<Vec<comment::Model>, ApiError> {
    Ok(comment::Entity::find()
        .filter(comment::Column::TodoId.eq(todo_id))
        .order_by_asc(comment::Column::Id)
        .all(db)
        .await?)
}
