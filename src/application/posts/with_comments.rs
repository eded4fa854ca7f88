use super::PostService;
use crate::{
    application::{
        dto::PostWithCommentsDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};

pub struct GetPostWithCommentsQuery {
    pub id: i64,
}

impl PostService {
    pub async fn get_post_with_comments(
        &self,
        query: GetPostWithCommentsQuery,
    ) -> ApplicationResult<PostWithCommentsDto> {
        let id = PostId::new(query.id)?;
        let aggregate = self
            .read_repo
            .find_with_comments(id)
            .await?
            .ok_or_else(|| ApplicationError::post_not_found(id))?;

        tracing::debug!(post_id = %id, comments = aggregate.comments.len(), "loaded post with comments");
        Ok(aggregate.into())
    }
}
