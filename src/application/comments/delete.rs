// src/application/comments/delete.rs
use super::CommentService;
use crate::{
    application::error::ApplicationResult,
    domain::{comment::CommentId, post::PostId},
};

pub struct DeleteCommentCommand {
    pub post_id: i64,
    pub comment_id: i64,
}

impl CommentService {
    /// Returns `true` once a read after the delete confirms the comment is gone.
    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<bool> {
        let post_id = PostId::new(command.post_id)?;
        let comment_id = CommentId::new(command.comment_id)?;
        self.require_scoped_comment(post_id, comment_id).await?;

        self.write_repo.delete(comment_id).await?;
        let removed = !self.read_repo.exists(comment_id).await?;

        if removed {
            tracing::info!(post_id = %post_id, comment_id = %comment_id, "comment deleted");
        } else {
            tracing::warn!(post_id = %post_id, comment_id = %comment_id, "comment still present after delete");
        }
        Ok(removed)
    }
}
