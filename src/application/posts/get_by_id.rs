use super::PostService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::PostId,
};

pub struct GetPostQuery {
    pub id: i64,
}

impl PostService {
    pub async fn get_post(&self, query: GetPostQuery) -> ApplicationResult<PostDto> {
        let id = PostId::new(query.id)?;
        let post = self.require_post(id).await?;
        Ok(post.into())
    }
}
