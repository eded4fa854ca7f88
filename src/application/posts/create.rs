// src/application/posts/create.rs
use super::PostService;
use crate::{
    application::{
        dto::{PostDto, PostInput},
        error::ApplicationResult,
    },
    domain::post::NewPost,
};

impl PostService {
    pub async fn create_post(&self, input: PostInput) -> ApplicationResult<PostDto> {
        let draft = input.into_draft()?;
        let new_post = NewPost::from_draft(draft, self.clock.now());

        let created = self.write_repo.insert(new_post).await?;
        tracing::info!(post_id = %created.id, "post created");
        Ok(created.into())
    }
}
