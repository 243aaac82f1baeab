//! Todo item store operations

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use std::collections::HashMap;
use validator::Validate;

use crate::error::ApiError;
use crate::models::{comment, todo_item};
use crate::requests::CreateTodoRequest;

/// List every todo with its comments eagerly loaded
///
/// Todos and their comments both come back in insertion (id) order. An
/// empty store yields an empty vec.
pub async fn list(
    db: &DatabaseConnection,
) -> Result<Vec<(todo_item::Model, Vec<comment::Model>)>, ApiError> {
    let todos = todo_item::Entity::find()
        .order_by_asc(todo_item::Column::Id)
        .all(db)
        .await?;

    // Every comment belongs to a listed todo, so one pass over the table
    // is enough to group them.
    let comments = comment::Entity::find()
        .order_by_asc(comment::Column::Id)
        .all(db)
        .await?;

    let mut comments_by_todo: HashMap<i32, Vec<comment::Model>> = HashMap::new();
    for comment in comments {
        comments_by_todo
            .entry(comment.todo_id)
            .or_default()
            .push(comment);
    }

    Ok(todos
        .into_iter()
        .map(|todo| {
            let comments = comments_by_todo.remove(&todo.id).unwrap_or_default();
            (todo, comments)
        })
        .collect())
}

/// Create a todo item
///
/// `title` is required and non-empty; `done` defaults to false. Nothing is
/// persisted when validation fails.
pub async fn create(
    db: &DatabaseConnection,
    payload: CreateTodoRequest,
) -> Result<todo_item::Model, ApiError> {
    let title = match payload.title.as_deref() {
        Some(t) if !t.trim().is_empty() => t.to_owned(),
        _ => return Err(ApiError::validation("Title is required")),
    };
    payload.validate().map_err(ApiError::from_validator)?;

    let todo = todo_item::ActiveModel {
        title: Set(title),
        done: Set(payload.done),
        ..Default::default()
    };
    Ok(todo.insert(db).await?)
}

/// Flip a todo's `done` flag and persist the result
///
/// The flag is always negated from its current stored value, never set to
/// an absolute value.
pub async fn toggle_done(db: &DatabaseConnection, id: i32) -> Result<todo_item::Model, ApiError> {
    let todo = todo_item::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound { resource: "Todo" })?;

    let done = todo.done;
    let mut active: todo_item::ActiveModel = todo.into();
    active.done = Set(!done);
    Ok(active.update(db).await?)
}

/// Delete a todo item and all of its comments
///
/// Children are removed in the same transaction as the parent, so the
/// cascade holds even on backends that do not enforce the foreign key's
/// referential action.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), ApiError> {
    db.transaction::<_, (), ApiError>(|txn| {
        Box::pin(async move {
            let todo = todo_item::Entity::find_by_id(id)
                .one(txn)
                .await?
                .ok_or(ApiError::NotFound { resource: "Todo" })?;

            comment::Entity::delete_many()
                .filter(comment::Column::TodoId.eq(todo.id))
                .exec(txn)
                .await?;
            todo_item::Entity::delete_by_id(todo.id).exec(txn).await?;
            Ok(())
        })
    })
    .await
    .map_err(ApiError::from)
}
