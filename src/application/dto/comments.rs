use crate::domain::comment::{Comment, CommentBody};
use crate::domain::errors::DomainResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub comment: String,
    pub post_id: i64,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            comment: comment.body.into_inner(),
            post_id: comment.post_id.into(),
        }
    }
}

/// Client-supplied comment body. The owning post comes from the request
/// path and is attached by the comment service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CommentInput {
    #[serde(default)]
    pub comment: String,
}

impl CommentInput {
    pub fn into_body(self) -> DomainResult<CommentBody> {
        CommentBody::new(self.comment)
    }
}
