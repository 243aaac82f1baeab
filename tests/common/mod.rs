#![allow(dead_code)]

use sea_orm_migration::MigratorTrait;
use todos_api::config::DatabaseConfig;
use todos_api::database::DbConnection;
use todos_api::migrations::Migrator;
use todos_api::requests::{CreateCommentRequest, CreateTodoRequest};

/// Fresh in-memory store with the schema applied
pub async fn setup_db() -> DbConnection {
    let db = DbConnection::connect(&DatabaseConfig::in_memory())
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(db.inner(), None)
        .await
        .expect("run migrations");
    db
}

pub fn todo_payload(title: &str) -> CreateTodoRequest {
    CreateTodoRequest {
        title: Some(title.to_string()),
        done: false,
    }
}

pub fn comment_payload(message: &str) -> CreateCommentRequest {
    CreateCommentRequest {
        message: Some(message.to_string()),
    }
}
