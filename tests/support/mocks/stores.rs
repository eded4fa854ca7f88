// tests/support/mocks/stores.rs
use async_trait::async_trait;
use quill_core::domain::comment::{
    Comment, CommentId, CommentReadRepository, CommentWriteRepository, NewComment,
};
use quill_core::domain::errors::{DomainError, DomainResult};
use quill_core::domain::post::{
    NewPost, Post, PostId, PostReadRepository, PostUpdate, PostWithComments, PostWriteRepository,
};
use quill_core::infrastructure::repositories::InMemoryBlogStore;

/// Every call fails as if the database were unreachable.
pub struct FailingStore;

fn unavailable<T>() -> DomainResult<T> {
    Err(DomainError::persistence("database unavailable"))
}

#[async_trait]
impl PostWriteRepository for FailingStore {
    async fn insert(&self, _post: NewPost) -> DomainResult<Post> {
        unavailable()
    }

    async fn update(&self, _update: PostUpdate) -> DomainResult<Option<Post>> {
        unavailable()
    }

    async fn delete(&self, _id: PostId) -> DomainResult<bool> {
        unavailable()
    }
}

#[async_trait]
impl PostReadRepository for FailingStore {
    async fn find_by_id(&self, _id: PostId) -> DomainResult<Option<Post>> {
        unavailable()
    }

    async fn list(&self) -> DomainResult<Vec<Post>> {
        unavailable()
    }

    async fn find_with_comments(&self, _id: PostId) -> DomainResult<Option<PostWithComments>> {
        unavailable()
    }
}

#[async_trait]
impl CommentWriteRepository for FailingStore {
    async fn insert(&self, _comment: NewComment) -> DomainResult<Comment> {
        unavailable()
    }

    async fn delete(&self, _id: CommentId) -> DomainResult<bool> {
        unavailable()
    }
}

#[async_trait]
impl CommentReadRepository for FailingStore {
    async fn find_by_id(&self, _id: CommentId) -> DomainResult<Option<Comment>> {
        unavailable()
    }

    async fn list_by_post(&self, _post_id: PostId) -> DomainResult<Vec<Comment>> {
        unavailable()
    }

    async fn exists(&self, _id: CommentId) -> DomainResult<bool> {
        unavailable()
    }
}

/// In-memory store whose comment deletes report success but keep the row,
/// so the read-after-delete check sees it.
#[derive(Default)]
pub struct StickyCommentStore {
    inner: InMemoryBlogStore,
}

#[async_trait]
impl PostWriteRepository for StickyCommentStore {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        PostWriteRepository::insert(&self.inner, post).await
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Option<Post>> {
        self.inner.update(update).await
    }

    async fn delete(&self, id: PostId) -> DomainResult<bool> {
        PostWriteRepository::delete(&self.inner, id).await
    }
}

#[async_trait]
impl PostReadRepository for StickyCommentStore {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        PostReadRepository::find_by_id(&self.inner, id).await
    }

    async fn list(&self) -> DomainResult<Vec<Post>> {
        self.inner.list().await
    }

    async fn find_with_comments(&self, id: PostId) -> DomainResult<Option<PostWithComments>> {
        self.inner.find_with_comments(id).await
    }
}

#[async_trait]
impl CommentWriteRepository for StickyCommentStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        CommentWriteRepository::insert(&self.inner, comment).await
    }

    async fn delete(&self, _id: CommentId) -> DomainResult<bool> {
        Ok(true)
    }
}

#[async_trait]
impl CommentReadRepository for StickyCommentStore {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        CommentReadRepository::find_by_id(&self.inner, id).await
    }

    async fn list_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        self.inner.list_by_post(post_id).await
    }

    async fn exists(&self, id: CommentId) -> DomainResult<bool> {
        self.inner.exists(id).await
    }
}
