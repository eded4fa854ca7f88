// src/infrastructure/repositories/in_memory.rs
use crate::domain::comment::{
    Comment, CommentId, CommentReadRepository, CommentWriteRepository, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostId, PostReadRepository, PostUpdate, PostWithComments, PostWriteRepository,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct State {
    posts: BTreeMap<PostId, Post>,
    comments: BTreeMap<CommentId, Comment>,
    last_post_id: i64,
    last_comment_id: i64,
}

impl State {
    fn comments_of(&self, post_id: PostId) -> Vec<Comment> {
        self.comments
            .values()
            .filter(|comment| comment.belongs_to(post_id))
            .cloned()
            .collect()
    }
}

/// Process-local persistence gateway backing all four repository seams.
///
/// Every operation runs under one lock, which gives the same per-entity
/// atomicity as a database transaction (a cascade delete is never observed
/// half done). Ids start at 1 and are never reused, even after deletes.
#[derive(Default)]
pub struct InMemoryBlogStore {
    state: Mutex<State>,
}

impl InMemoryBlogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> DomainResult<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| DomainError::persistence("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryBlogStore {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut state = self.state()?;
        state.last_post_id += 1;
        let stored = Post {
            id: PostId::new(state.last_post_id)?,
            title: post.title,
            content: post.content,
            author: post.author,
            published_at: post.published_at,
        };
        state.posts.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Option<Post>> {
        let mut state = self.state()?;
        let Some(post) = state.posts.get_mut(&update.id) else {
            return Ok(None);
        };
        post.title = update.title;
        post.content = update.content;
        post.author = update.author;
        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: PostId) -> DomainResult<bool> {
        let mut state = self.state()?;
        state.comments.retain(|_, comment| !comment.belongs_to(id));
        Ok(state.posts.remove(&id).is_some())
    }
}

#[async_trait]
impl PostReadRepository for InMemoryBlogStore {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.state()?.posts.get(&id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Post>> {
        Ok(self.state()?.posts.values().cloned().collect())
    }

    async fn find_with_comments(&self, id: PostId) -> DomainResult<Option<PostWithComments>> {
        let state = self.state()?;
        Ok(state.posts.get(&id).map(|post| PostWithComments {
            post: post.clone(),
            comments: state.comments_of(id),
        }))
    }
}

#[async_trait]
impl CommentWriteRepository for InMemoryBlogStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.state()?;
        if !state.posts.contains_key(&comment.post_id) {
            return Err(DomainError::persistence(format!(
                "database constraint violation: post {} does not exist",
                comment.post_id
            )));
        }

        state.last_comment_id += 1;
        let stored = Comment {
            id: CommentId::new(state.last_comment_id)?,
            body: comment.body,
            post_id: comment.post_id,
        };
        state.comments.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<bool> {
        Ok(self.state()?.comments.remove(&id).is_some())
    }
}

#[async_trait]
impl CommentReadRepository for InMemoryBlogStore {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.state()?.comments.get(&id).cloned())
    }

    async fn list_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        Ok(self.state()?.comments_of(post_id))
    }

    async fn exists(&self, id: CommentId) -> DomainResult<bool> {
        Ok(self.state()?.comments.contains_key(&id))
    }
}
