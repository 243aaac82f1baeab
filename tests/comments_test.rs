mod common;

use pretty_assertions::assert_eq;
use todos_api::actions::{comment as comments, todo as todos};
use todos_api::error::ApiError;
use todos_api::requests::CreateCommentRequest;
use todos_api::resources::TodoItemResource;

#[tokio::test]
async fn add_comment_appends_exactly_one() {
    let db = common::setup_db().await;
    let todo = todos::create(&db, common::todo_payload("Annotate me"))
        .await
        .unwrap();

    let before = TodoItemResource::from_parts(&todo, &comments::for_todo(&db, todo.id).await.unwrap());

    let created = comments::add_comment(&db, todo.id, common::comment_payload("First note"))
        .await
        .unwrap();
    assert_eq!(created.message, "First note");
    assert_eq!(created.todo_id, todo.id);

    let after = TodoItemResource::from_parts(&todo, &comments::for_todo(&db, todo.id).await.unwrap());
    assert_eq!(after.comments.len(), before.comments.len() + 1);
    assert_eq!(after.comments[0].id, created.id);
}

#[tokio::test]
async fn add_comment_to_unknown_todo_is_not_found() {
    let db = common::setup_db().await;

    let err = comments::add_comment(&db, 42, common::comment_payload("into the void"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));
    assert_eq!(err.to_string(), "Todo not found");
}

#[tokio::test]
async fn missing_parent_takes_precedence_over_missing_message() {
    let db = common::setup_db().await;

    let err = comments::add_comment(&db, 42, CreateCommentRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));
}

#[tokio::test]
async fn add_comment_without_message_is_rejected() {
    let db = common::setup_db().await;
    let todo = todos::create(&db, common::todo_payload("Annotate me"))
        .await
        .unwrap();

    let err = comments::add_comment(&db, todo.id, CreateCommentRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation { .. }));
    assert_eq!(err.to_string(), "Message is required");

    assert!(comments::for_todo(&db, todo.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn add_comment_with_overlong_message_is_rejected() {
    let db = common::setup_db().await;
    let todo = todos::create(&db, common::todo_payload("Annotate me"))
        .await
        .unwrap();

    let err = comments::add_comment(&db, todo.id, common::comment_payload(&"y".repeat(251)))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Message must be at most 250 characters");
}

#[tokio::test]
async fn comments_come_back_in_insertion_order() {
    let db = common::setup_db().await;
    let todo = todos::create(&db, common::todo_payload("Ordered"))
        .await
        .unwrap();

    for message in ["alpha", "beta", "gamma"] {
        comments::add_comment(&db, todo.id, common::comment_payload(message))
            .await
            .unwrap();
    }

    let loaded = comments::for_todo(&db, todo.id).await.unwrap();
    let messages: Vec<&str> = loaded.iter().map(|c| c.message.as_str()).collect();
    assert_eq!(messages, vec!["alpha", "beta", "gamma"]);

    // The eager-loaded collection in list() matches
    let listed = todos::list(&db).await.unwrap();
    assert_eq!(listed[0].1, loaded);
}
