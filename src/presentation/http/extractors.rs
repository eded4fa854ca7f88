// src/presentation/http/extractors.rs
use super::error::HttpError;
use crate::application::error::ApplicationError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::collections::HashMap;

/// `{id}` segment of `/posts/{id}/...`.
#[derive(Debug, Clone, Copy)]
pub struct PostPath(pub i64);

/// `{id}` and `{commentId}` segments of `/posts/{id}/comments/{commentId}`.
#[derive(Debug, Clone, Copy)]
pub struct CommentPath {
    pub post_id: i64,
    pub comment_id: i64,
}

async fn path_params<S>(parts: &mut Parts, state: &S) -> Result<HashMap<String, String>, HttpError>
where
    S: Send + Sync,
{
    let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state).await?;
    Ok(params)
}

/// Positivity is left to the services; only the integer syntax is checked here.
fn numeric(
    params: &HashMap<String, String>,
    key: &str,
    field: &'static str,
    message: &'static str,
) -> Result<i64, HttpError> {
    params
        .get(key)
        .and_then(|raw| raw.parse::<i64>().ok())
        .ok_or_else(|| HttpError::from_error(ApplicationError::validation(field, message)))
}

impl<S> FromRequestParts<S> for PostPath
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = path_params(parts, state).await?;
        let id = numeric(&params, "id", "postId", "Post Id should be Positive Integer")?;
        Ok(Self(id))
    }
}

impl<S> FromRequestParts<S> for CommentPath
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = path_params(parts, state).await?;
        let post_id = numeric(&params, "id", "postId", "Post Id should be Positive Integer")?;
        let comment_id = numeric(
            &params,
            "commentId",
            "commentId",
            "Comment Id should be Positive Integer",
        )?;
        Ok(Self {
            post_id,
            comment_id,
        })
    }
}
