use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate, PostWithComments};
use crate::domain::post::value_objects::PostId;
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    /// Returns `None` when the post vanished before the write landed.
    async fn update(&self, update: PostUpdate) -> DomainResult<Option<Post>>;
    /// Removes the post and every comment referencing it as one atomic unit.
    /// Returns whether a post row was removed.
    async fn delete(&self, id: PostId) -> DomainResult<bool>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn list(&self) -> DomainResult<Vec<Post>>;
    async fn find_with_comments(&self, id: PostId) -> DomainResult<Option<PostWithComments>>;
}
