// src/application/posts/delete.rs
use super::PostService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::post::PostId,
};

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostService {
    /// Deletes the post and, in the same storage transaction, its comments.
    pub async fn delete_post(&self, command: DeletePostCommand) -> ApplicationResult<()> {
        let id = PostId::new(command.id)?;
        self.require_post(id).await?;

        if !self.write_repo.delete(id).await? {
            return Err(ApplicationError::post_not_found(id));
        }

        tracing::info!(post_id = %id, "post deleted with its comments");
        Ok(())
    }
}
