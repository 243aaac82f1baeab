use crate::actions;
use crate::controllers::parse_id;
use crate::database::DbConnection;
use crate::http::{HttpResponse, Request, Response};
use crate::resources::CommentResource;

/// POST /api/todos/{todo_id}/comments/
pub async fn store(db: DbConnection, req: Request) -> Response {
    let todo_id = parse_id(req.param("todo_id")?)?;
    let payload = req.json().await?;
    let comment = actions::comment::add_comment(&db, todo_id, payload).await?;
    Ok(HttpResponse::json(serde_json::json!(
        CommentResource::from_model(&comment)
    )))
}
