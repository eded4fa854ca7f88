// src/application/posts/update.rs
use super::PostService;
use crate::{
    application::{
        dto::{PostDto, PostInput},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostId, PostUpdate},
};

pub struct UpdatePostCommand {
    pub id: i64,
    pub input: PostInput,
}

impl PostService {
    /// Replaces title, content and author. Concurrent updates are
    /// last-write-wins.
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let UpdatePostCommand { id, input } = command;
        let id = PostId::new(id)?;
        let mut post = self.require_post(id).await?;

        post.apply(input.into_draft()?);

        let updated = self
            .write_repo
            .update(PostUpdate::from(post))
            .await?
            .ok_or_else(|| ApplicationError::post_not_found(id))?;

        tracing::info!(post_id = %id, "post updated");
        Ok(updated.into())
    }
}
