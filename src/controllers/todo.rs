use crate::actions;
use crate::controllers::parse_id;
use crate::database::DbConnection;
use crate::http::{HttpResponse, Request, Response};
use crate::json_response;
use crate::resources::TodoItemResource;

/// GET /api/todos/
pub async fn index(db: DbConnection, _req: Request) -> Response {
    let todos = actions::todo::list(&db).await?;
    let body: Vec<TodoItemResource> = todos
        .iter()
        .map(|(todo, comments)| TodoItemResource::from_parts(todo, comments))
        .collect();
    Ok(HttpResponse::json(serde_json::json!(body)))
}

/// POST /api/todos/
pub async fn store(db: DbConnection, req: Request) -> Response {
    let payload = req.json().await?;
    let todo = actions::todo::create(&db, payload).await?;
    // A freshly created todo has no comments yet
    Ok(HttpResponse::json(serde_json::json!(
        TodoItemResource::from_parts(&todo, &[])
    )))
}

/// PATCH /api/todos/{id}/toggle/
pub async fn toggle(db: DbConnection, req: Request) -> Response {
    let id = parse_id(req.param("id")?)?;
    let todo = actions::todo::toggle_done(&db, id).await?;
    let comments = actions::comment::for_todo(&db, todo.id).await?;
    Ok(HttpResponse::json(serde_json::json!(
        TodoItemResource::from_parts(&todo, &comments)
    )))
}

/// DELETE /api/todos/{id}/
pub async fn destroy(db: DbConnection, req: Request) -> Response {
    let id = parse_id(req.param("id")?)?;
    actions::todo::delete(&db, id).await?;
    json_response!({ "message": "Todo deleted successfully" })
}
