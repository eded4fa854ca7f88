// src/presentation/http/controllers/comments.rs
use crate::application::{
    comments::{CreateCommentCommand, DeleteCommentCommand, GetCommentQuery},
    dto::{CommentDto, CommentInput},
};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    extractors::{CommentPath, PostPath},
    json::Json,
    openapi::DeletionResponse,
    state::HttpState,
};
use axum::{Extension, http::StatusCode};

#[utoipa::path(
    post,
    path = "/posts/{id}/comments",
    params(("id" = i64, Path, description = "Post identifier")),
    request_body = CommentInput,
    responses(
        (status = 201, description = "Comment created.", body = CommentDto),
        (status = 400, description = "Invalid id or comment body.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    PostPath(post_id): PostPath,
    Json(payload): Json<CommentInput>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let comment = state
        .services
        .comments
        .create_comment(CreateCommentCommand {
            post_id,
            input: payload,
        })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(comment)))
}

#[utoipa::path(
    get,
    path = "/posts/{id}/comments/{commentId}",
    params(
        ("id" = i64, Path, description = "Post identifier"),
        ("commentId" = i64, Path, description = "Comment identifier")
    ),
    responses(
        (status = 200, description = "The comment.", body = CommentDto),
        (status = 400, description = "Invalid id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post or comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn get_comment(
    Extension(state): Extension<HttpState>,
    path: CommentPath,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comments
        .get_comment(GetCommentQuery {
            post_id: path.post_id,
            comment_id: path.comment_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/posts/{id}/comments/{commentId}",
    params(
        ("id" = i64, Path, description = "Post identifier"),
        ("commentId" = i64, Path, description = "Comment identifier")
    ),
    responses(
        (status = 200, description = "Comment deleted, or deletion not confirmed.", body = DeletionResponse),
        (status = 400, description = "Invalid id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post or comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    path: CommentPath,
) -> HttpResult<Json<DeletionResponse>> {
    let CommentPath {
        post_id,
        comment_id,
    } = path;

    let removed = state
        .services
        .comments
        .delete_comment(DeleteCommentCommand {
            post_id,
            comment_id,
        })
        .await
        .into_http()?;

    let response = if removed {
        DeletionResponse::deleted(format!("comment {comment_id} of post {post_id} was deleted"))
    } else {
        DeletionResponse::unconfirmed(format!(
            "comment {comment_id} of post {post_id} is still present after delete"
        ))
    };
    Ok(Json(response))
}
