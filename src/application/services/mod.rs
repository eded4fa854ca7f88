// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{comments::CommentService, ports::ClockPort, posts::PostService},
    domain::{
        comment::{CommentReadRepository, CommentWriteRepository},
        post::{PostReadRepository, PostWriteRepository},
    },
};

/// The persistence gateway as seen by the services: one handle per
/// repository seam, usually all backed by the same store.
#[derive(Clone)]
pub struct Repositories {
    pub post_write: Arc<dyn PostWriteRepository>,
    pub post_read: Arc<dyn PostReadRepository>,
    pub comment_write: Arc<dyn CommentWriteRepository>,
    pub comment_read: Arc<dyn CommentReadRepository>,
}

impl Repositories {
    /// Uses a single store for all four seams.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: PostWriteRepository
            + PostReadRepository
            + CommentWriteRepository
            + CommentReadRepository
            + 'static,
    {
        Self {
            post_write: Arc::clone(&store) as Arc<dyn PostWriteRepository>,
            post_read: Arc::clone(&store) as Arc<dyn PostReadRepository>,
            comment_write: Arc::clone(&store) as Arc<dyn CommentWriteRepository>,
            comment_read: store,
        }
    }
}

pub struct ApplicationServices {
    pub posts: Arc<PostService>,
    pub comments: Arc<CommentService>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, clock: Arc<ClockPort>) -> Self {
        let posts = Arc::new(PostService::new(
            Arc::clone(&repos.post_write),
            Arc::clone(&repos.post_read),
            clock,
        ));

        let comments = Arc::new(CommentService::new(
            repos.comment_write,
            repos.comment_read,
            repos.post_read,
        ));

        Self { posts, comments }
    }
}
