pub mod comments;
pub mod posts;
pub mod serde_time;

pub use comments::{CommentDto, CommentInput};
pub use posts::{PostDto, PostInput, PostWithCommentsDto};
