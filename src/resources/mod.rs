//! Wire-format mapping for persisted entities
//!
//! Pure functions over already-loaded models; nothing here touches the
//! database. The comment collection is passed in explicitly and must be
//! the full persisted set for the todo being serialized.

use serde::Serialize;

use crate::models::{comment, todo_item};

/// Serialized comment: `{id, message, todo_id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentResource {
    pub id: i32,
    pub message: String,
    pub todo_id: i32,
}

impl CommentResource {
    pub fn from_model(comment: &comment::Model) -> Self {
        Self {
            id: comment.id,
            message: comment.message.clone(),
            todo_id: comment.todo_id,
        }
    }
}

/// Serialized todo item: `{id, title, done, comments: [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoItemResource {
    pub id: i32,
    pub title: String,
    pub done: bool,
    pub comments: Vec<CommentResource>,
}

impl TodoItemResource {
    pub fn from_parts(todo: &todo_item::Model, comments: &[comment::Model]) -> Self {
        Self {
            id: todo.id,
            title: todo.title.clone(),
            done: todo.done,
            comments: comments.iter().map(CommentResource::from_model).collect(),
        }
    }
}
