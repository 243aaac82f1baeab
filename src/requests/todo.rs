use serde::Deserialize;
use validator::Validate;

/// Payload for creating a todo item
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateTodoRequest {
    #[validate(length(max = 100, message = "Title must be at most 100 characters"))]
    pub title: Option<String>,
    #[serde(default)]
    pub done: bool,
}
