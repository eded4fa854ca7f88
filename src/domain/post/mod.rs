pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPost, Post, PostDraft, PostUpdate, PostWithComments};
pub use repository::{PostReadRepository, PostWriteRepository};
pub use value_objects::{PostAuthor, PostContent, PostId, PostTitle};
