use super::CommentService;
use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::{comment::CommentId, post::PostId},
};

pub struct GetCommentQuery {
    pub post_id: i64,
    pub comment_id: i64,
}

impl CommentService {
    pub async fn get_comment(&self, query: GetCommentQuery) -> ApplicationResult<CommentDto> {
        let post_id = PostId::new(query.post_id)?;
        let comment_id = CommentId::new(query.comment_id)?;

        let comment = self.require_scoped_comment(post_id, comment_id).await?;
        Ok(comment.into())
    }
}
