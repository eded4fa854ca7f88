// src/infrastructure/repositories/mod.rs
pub mod error;
mod in_memory;
mod sqlite_comment;
mod sqlite_post;

pub use in_memory::InMemoryBlogStore;
pub use sqlite_comment::SqliteCommentRepository;
pub use sqlite_post::SqlitePostRepository;
