// src/application/comments/create.rs
use super::CommentService;
use crate::{
    application::{
        dto::{CommentDto, CommentInput},
        error::ApplicationResult,
    },
    domain::{comment::NewComment, post::PostId},
};

pub struct CreateCommentCommand {
    pub post_id: i64,
    pub input: CommentInput,
}

impl CommentService {
    /// The parent post is resolved before the body is validated, so a missing
    /// post wins over an invalid body.
    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let CreateCommentCommand { post_id, input } = command;
        let post_id = PostId::new(post_id)?;
        self.ensure_post_exists(post_id).await?;

        let new_comment = NewComment {
            body: input.into_body()?,
            post_id,
        };

        let created = self.write_repo.insert(new_comment).await?;
        tracing::info!(post_id = %post_id, comment_id = %created.id, "comment created");
        Ok(created.into())
    }
}
