// src/application/comments/service.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        comment::{Comment, CommentId, CommentReadRepository, CommentWriteRepository},
        post::{PostId, PostReadRepository},
    },
};

pub struct CommentService {
    pub(super) write_repo: Arc<dyn CommentWriteRepository>,
    pub(super) read_repo: Arc<dyn CommentReadRepository>,
    pub(super) post_repo: Arc<dyn PostReadRepository>,
}

impl CommentService {
    pub fn new(
        write_repo: Arc<dyn CommentWriteRepository>,
        read_repo: Arc<dyn CommentReadRepository>,
        post_repo: Arc<dyn PostReadRepository>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            post_repo,
        }
    }

    pub(super) async fn ensure_post_exists(&self, id: PostId) -> ApplicationResult<()> {
        match self.post_repo.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::post_not_found(id)),
        }
    }

    /// Resolves a comment that must exist and belong to `post_id`. The post is
    /// checked first so a missing post is never reported as a missing comment.
    pub(super) async fn require_scoped_comment(
        &self,
        post_id: PostId,
        id: CommentId,
    ) -> ApplicationResult<Comment> {
        self.ensure_post_exists(post_id).await?;

        self.read_repo
            .find_by_id(id)
            .await?
            .filter(|comment| comment.belongs_to(post_id))
            .ok_or_else(|| ApplicationError::comment_not_found(post_id, id))
    }
}
