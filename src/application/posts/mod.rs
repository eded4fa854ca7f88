// src/application/posts/mod.rs
mod create;
mod delete;
mod get_by_id;
mod list;
mod service;
mod update;
mod with_comments;

pub use delete::DeletePostCommand;
pub use get_by_id::GetPostQuery;
pub use service::PostService;
pub use update::UpdatePostCommand;
pub use with_comments::GetPostWithCommentsQuery;
