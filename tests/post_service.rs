// tests/post_service.rs
use quill_core::application::dto::PostInput;
use quill_core::application::error::{ApplicationError, Entity, ErrorKind};
use quill_core::application::posts::{
    DeletePostCommand, GetPostQuery, GetPostWithCommentsQuery, UpdatePostCommand,
};
use quill_core::application::comments::{CreateCommentCommand, GetCommentQuery};
use quill_core::application::services::Repositories;
use std::sync::Arc;

mod support;

use support::PostInputBuilder;

#[tokio::test]
async fn create_then_get_returns_same_fields() {
    let services = support::in_memory_services();

    let created = services
        .posts
        .create_post(
            PostInputBuilder::new()
                .title("Hi There")
                .content("Hello world content")
                .author("Ann Lee")
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.published_at, support::fixed_now());

    let fetched = services
        .posts
        .get_post(GetPostQuery { id: 1 })
        .await
        .unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.title, "Hi There");
    assert_eq!(fetched.content, "Hello world content");
    assert_eq!(fetched.author, "Ann Lee");
}

#[tokio::test]
async fn invalid_fields_fail_and_persist_nothing() {
    let services = support::in_memory_services();

    let cases: Vec<(PostInput, &str)> = vec![
        (PostInputBuilder::new().title("Hi").build(), "title"),
        (PostInputBuilder::new().title("x".repeat(101)).build(), "title"),
        (PostInputBuilder::new().title("   ").build(), "title"),
        (PostInputBuilder::new().content("ab").build(), "content"),
        (PostInputBuilder::new().content("y".repeat(201)).build(), "content"),
        (PostInputBuilder::new().author("").build(), "author"),
    ];

    for (input, field) in cases {
        let err = services.posts.create_post(input).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.field(), Some(field));
    }

    assert!(services.posts.list_posts().await.unwrap().is_empty());
}

#[tokio::test]
async fn first_invalid_field_is_reported() {
    let services = support::in_memory_services();
    let input = PostInputBuilder::new().title("no").content("no").build();

    let err = services.posts.create_post(input).await.unwrap_err();
    match err {
        ApplicationError::Validation { field, message } => {
            assert_eq!(field, "title");
            assert_eq!(message, "Title Length Must be between 3 to 100 Characters");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unknown_and_non_positive_ids() {
    let services = support::in_memory_services();

    let err = services
        .posts
        .get_post(GetPostQuery { id: 42 })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound(Entity::Post));
    assert_eq!(err.to_string(), "post with id 42 not found");

    let err = services
        .posts
        .get_post(GetPostQuery { id: 0 })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.field(), Some("postId"));
}

#[tokio::test]
async fn list_is_ordered_by_id() {
    let services = support::in_memory_services();
    for title in ["first", "second", "third"] {
        services
            .posts
            .create_post(PostInputBuilder::new().title(title).build())
            .await
            .unwrap();
    }

    let titles: Vec<String> = services
        .posts
        .list_posts()
        .await
        .unwrap()
        .into_iter()
        .map(|post| post.title)
        .collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn update_overwrites_fields_but_keeps_id_and_timestamp() {
    let services = support::in_memory_services();
    let created = services
        .posts
        .create_post(PostInputBuilder::new().build())
        .await
        .unwrap();

    let updated = services
        .posts
        .update_post(UpdatePostCommand {
            id: created.id,
            input: PostInputBuilder::new()
                .title("Edited title")
                .content("Edited content")
                .author("Bo Chen")
                .build(),
        })
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.published_at, created.published_at);
    assert_eq!(updated.title, "Edited title");
    assert_eq!(updated.author, "Bo Chen");

    let fetched = services
        .posts
        .get_post(GetPostQuery { id: created.id })
        .await
        .unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_of_missing_post_is_not_found_even_with_invalid_input() {
    let services = support::in_memory_services();

    let err = services
        .posts
        .update_post(UpdatePostCommand {
            id: 5,
            input: PostInputBuilder::new().title("x").build(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound(Entity::Post));
}

#[tokio::test]
async fn invalid_update_leaves_post_untouched() {
    let services = support::in_memory_services();
    let created = services
        .posts
        .create_post(PostInputBuilder::new().build())
        .await
        .unwrap();

    let err = services
        .posts
        .update_post(UpdatePostCommand {
            id: created.id,
            input: PostInputBuilder::new().content("").build(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.field(), Some("content"));

    let fetched = services
        .posts
        .get_post(GetPostQuery { id: created.id })
        .await
        .unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn delete_removes_post_and_its_comments() {
    let services = support::in_memory_services();
    let post = services
        .posts
        .create_post(PostInputBuilder::new().build())
        .await
        .unwrap();
    let comment = services
        .comments
        .create_comment(CreateCommentCommand {
            post_id: post.id,
            input: support::comment_input("Nice post!"),
        })
        .await
        .unwrap();

    services
        .posts
        .delete_post(DeletePostCommand { id: post.id })
        .await
        .unwrap();

    let err = services
        .posts
        .get_post_with_comments(GetPostWithCommentsQuery { id: post.id })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound(Entity::Post));

    let err = services
        .comments
        .get_comment(GetCommentQuery {
            post_id: post.id,
            comment_id: comment.id,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound(Entity::Post));

    let err = services
        .posts
        .delete_post(DeletePostCommand { id: post.id })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound(Entity::Post));
}

#[tokio::test]
async fn persistence_failures_are_surfaced() {
    let services = support::build_services(Repositories::from_store(Arc::new(
        support::FailingStore,
    )));

    let err = services.posts.list_posts().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PersistenceFailure);

    let err = services
        .posts
        .create_post(PostInputBuilder::new().build())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PersistenceFailure);
    assert!(err.to_string().contains("database unavailable"));
}
