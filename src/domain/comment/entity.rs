use crate::domain::comment::value_objects::{CommentBody, CommentId};
use crate::domain::post::PostId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub body: CommentBody,
    pub post_id: PostId,
}

impl Comment {
    pub fn belongs_to(&self, post_id: PostId) -> bool {
        self.post_id == post_id
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub body: CommentBody,
    pub post_id: PostId,
}
