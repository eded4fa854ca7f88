use crate::domain::errors::DomainResult;
use crate::domain::post::{Post, PostAuthor, PostContent, PostDraft, PostTitle, PostWithComments};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{CommentDto, serde_time};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(with = "serde_time")]
    pub published_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            content: post.content.into_inner(),
            author: post.author.into_inner(),
            published_at: post.published_at,
        }
    }
}

/// Client-supplied post fields. `id` and `publishedAt` are owned by the
/// server, so they are not part of this type and are dropped if sent.
/// Missing fields deserialize as empty strings and fail validation as blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
}

impl PostInput {
    pub fn into_draft(self) -> DomainResult<PostDraft> {
        Ok(PostDraft {
            title: PostTitle::new(self.title)?,
            content: PostContent::new(self.content)?,
            author: PostAuthor::new(self.author)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostWithCommentsDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(with = "serde_time")]
    pub published_at: DateTime<Utc>,
    pub comments: Vec<CommentDto>,
}

impl From<PostWithComments> for PostWithCommentsDto {
    fn from(value: PostWithComments) -> Self {
        let PostWithComments { post, comments } = value;
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            content: post.content.into_inner(),
            author: post.author.into_inner(),
            published_at: post.published_at,
            comments: comments.into_iter().map(CommentDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comment::{Comment, CommentBody, CommentId};
    use crate::domain::post::PostId;
    use chrono::TimeZone;

    fn sample_post() -> Post {
        Post {
            id: PostId::new(1).unwrap(),
            title: PostTitle::new("Hi There").unwrap(),
            content: PostContent::new("Hello world content").unwrap(),
            author: PostAuthor::new("Ann Lee").unwrap(),
            published_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn post_serializes_in_camel_case() {
        let json = serde_json::to_value(PostDto::from(sample_post())).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Hi There");
        assert_eq!(json["author"], "Ann Lee");
        assert_eq!(json["publishedAt"], "2024-01-01T00:00:00+00:00");
        assert!(json.get("comments").is_none());
    }

    #[test]
    fn input_ignores_server_owned_fields() {
        let input: PostInput = serde_json::from_value(serde_json::json!({
            "id": 77,
            "publishedAt": "1999-01-01T00:00:00Z",
            "title": "Hi There",
            "content": "Hello world content",
            "author": "Ann Lee"
        }))
        .unwrap();

        let draft = input.into_draft().unwrap();
        assert_eq!(draft.title.as_str(), "Hi There");
        assert_eq!(draft.author.as_str(), "Ann Lee");
    }

    #[test]
    fn missing_field_fails_as_blank() {
        let input: PostInput =
            serde_json::from_value(serde_json::json!({ "title": "Hi There" })).unwrap();
        let err = input.into_draft().unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation error: content | must not be blank"
        );
    }

    #[test]
    fn post_with_comments_maps_each_comment() {
        let post = sample_post();
        let comment = Comment {
            id: CommentId::new(5).unwrap(),
            body: CommentBody::new("Nice post!").unwrap(),
            post_id: post.id,
        };

        let dto = PostWithCommentsDto::from(PostWithComments {
            post,
            comments: vec![comment],
        });

        assert_eq!(dto.id, 1);
        assert_eq!(dto.comments.len(), 1);
        assert_eq!(dto.comments[0].id, 5);
        assert_eq!(dto.comments[0].post_id, 1);
        assert_eq!(dto.comments[0].comment, "Nice post!");
    }
}
