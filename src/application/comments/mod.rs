// src/application/comments/mod.rs
mod create;
mod delete;
mod get_by_id;
mod service;

pub use create::CreateCommentCommand;
pub use delete::DeleteCommentCommand;
pub use get_by_id::GetCommentQuery;
pub use service::CommentService;
