//! HTTP route table
//!
//! The connection handle is cloned into each handler closure, keeping the
//! storage context an explicit argument instead of process-global state.

use crate::controllers;
use crate::database::DbConnection;
use crate::routing::Router;

pub fn router(db: &DbConnection) -> Router {
    Router::new()
        .get("/api/todos/", {
            let db = db.clone();
            move |req| controllers::todo::index(db.clone(), req)
        })
        .post("/api/todos/", {
            let db = db.clone();
            move |req| controllers::todo::store(db.clone(), req)
        })
        .patch("/api/todos/{id}/toggle/", {
            let db = db.clone();
            move |req| controllers::todo::toggle(db.clone(), req)
        })
        .delete("/api/todos/{id}/", {
            let db = db.clone();
            move |req| controllers::todo::destroy(db.clone(), req)
        })
        .post("/api/todos/{todo_id}/comments/", {
            let db = db.clone();
            move |req| controllers::comment::store(db.clone(), req)
        })
}
