use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// Outcome of a delete. `status` is `deleted`, or `unconfirmed` when the
/// record could still be read back afterwards.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletionResponse {
    pub status: String,
    pub message: String,
}

impl DeletionResponse {
    pub fn deleted(message: impl Into<String>) -> Self {
        Self {
            status: "deleted".into(),
            message: message.into(),
        }
    }

    pub fn unconfirmed(message: impl Into<String>) -> Self {
        Self {
            status: "unconfirmed".into(),
            message: message.into(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::get_post,
        crate::presentation::http::controllers::posts::update_post,
        crate::presentation::http::controllers::posts::delete_post,
        crate::presentation::http::controllers::posts::get_post_with_comments,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::comments::get_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            DeletionResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::dto::PostDto,
            crate::application::dto::PostInput,
            crate::application::dto::PostWithCommentsDto,
            crate::application::dto::CommentDto,
            crate::application::dto::CommentInput
        )
    ),
    tags(
        (name = "Posts", description = "Blog post endpoints"),
        (name = "Comments", description = "Comments attached to a post"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Quill API",
        description = "Blog posts and their comments",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}
