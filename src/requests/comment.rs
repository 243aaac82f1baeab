use serde::Deserialize;
use validator::Validate;

/// Payload for adding a comment to a todo item
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(max = 250, message = "Message must be at most 250 characters"))]
    pub message: Option<String>,
}
