// src/presentation/http/controllers/posts.rs
use crate::application::{
    dto::{PostDto, PostInput, PostWithCommentsDto},
    posts::{DeletePostCommand, GetPostQuery, GetPostWithCommentsQuery, UpdatePostCommand},
};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    extractors::PostPath,
    json::Json,
    openapi::DeletionResponse,
    state::HttpState,
};
use axum::{
    Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[utoipa::path(
    get,
    path = "/posts",
    responses(
        (status = 200, description = "All posts, ordered by id.", body = [PostDto]),
        (status = 204, description = "No posts stored."),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let posts = state.services.posts.list_posts().await.into_http()?;
    if posts.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(posts).into_response())
}

#[utoipa::path(
    post,
    path = "/posts",
    request_body = PostInput,
    responses(
        (status = 201, description = "Post created.", body = PostDto),
        (status = 400, description = "Invalid post fields.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<PostInput>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let post = state.services.posts.create_post(payload).await.into_http()?;
    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    get,
    path = "/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "The post.", body = PostDto),
        (status = 400, description = "Invalid id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    PostPath(id): PostPath,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .posts
        .get_post(GetPostQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    request_body = PostInput,
    responses(
        (status = 200, description = "Post updated.", body = PostDto),
        (status = 400, description = "Invalid id or post fields.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    PostPath(id): PostPath,
    Json(payload): Json<PostInput>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .posts
        .update_post(UpdatePostCommand { id, input: payload })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post and its comments deleted.", body = DeletionResponse),
        (status = 400, description = "Invalid id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    PostPath(id): PostPath,
) -> HttpResult<Json<DeletionResponse>> {
    state
        .services
        .posts
        .delete_post(DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(Json(DeletionResponse::deleted(format!(
        "post {id} and its comments were deleted"
    ))))
}

#[utoipa::path(
    get,
    path = "/posts/{id}/comments",
    params(("id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "The post with all of its comments.", body = PostWithCommentsDto),
        (status = 400, description = "Invalid id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post_with_comments(
    Extension(state): Extension<HttpState>,
    PostPath(id): PostPath,
) -> HttpResult<Json<PostWithCommentsDto>> {
    state
        .services
        .posts
        .get_post_with_comments(GetPostWithCommentsQuery { id })
        .await
        .into_http()
        .map(Json)
}
