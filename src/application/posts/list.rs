use super::PostService;
use crate::application::{dto::PostDto, error::ApplicationResult};

impl PostService {
    /// Every stored post, oldest first. An empty vector is a normal outcome.
    pub async fn list_posts(&self) -> ApplicationResult<Vec<PostDto>> {
        let posts = self.read_repo.list().await?;
        tracing::debug!(count = posts.len(), "listed posts");
        Ok(posts.into_iter().map(Into::into).collect())
    }
}
