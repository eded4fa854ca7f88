// src/domain/post/entity.rs
use crate::domain::comment::Comment;
use crate::domain::post::value_objects::{PostAuthor, PostContent, PostId, PostTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
    pub author: PostAuthor,
    pub published_at: DateTime<Utc>,
}

impl Post {
    /// Overwrites the client-editable fields; `id` and `published_at` are kept.
    pub fn apply(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.author = draft.author;
    }
}

/// Validated client input for a post, free of server-owned fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: PostTitle,
    pub content: PostContent,
    pub author: PostAuthor,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub content: PostContent,
    pub author: PostAuthor,
    pub published_at: DateTime<Utc>,
}

impl NewPost {
    pub fn from_draft(draft: PostDraft, published_at: DateTime<Utc>) -> Self {
        Self {
            title: draft.title,
            content: draft.content,
            author: draft.author,
            published_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
    pub author: PostAuthor,
}

impl From<Post> for PostUpdate {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
        }
    }
}

/// A post together with every comment it owns, as read in one round trip.
#[derive(Debug, Clone)]
pub struct PostWithComments {
    pub post: Post,
    pub comments: Vec<Comment>,
}
