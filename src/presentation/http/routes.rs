// src/presentation/http/routes.rs
use crate::config::AllowedOrigins;
use crate::presentation::http::{
    controllers::{comments, posts},
    error::HttpError,
    json::Json,
    openapi::{self, StatusResponse},
    state::HttpState,
};
use axum::{
    Extension, Router,
    extract::Request,
    http::{HeaderValue, Method},
    routing::get,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, origins: &AllowedOrigins) -> Router {
    Router::new()
        .route("/openapi.json", get(openapi::serve_openapi))
        .route("/health", get(health))
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/posts/{id}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route(
            "/posts/{id}/comments",
            get(posts::get_post_with_comments).post(comments::create_comment),
        )
        .route(
            "/posts/{id}/comments/{commentId}",
            get(comments::get_comment).delete(comments::delete_comment),
        )
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(origins))
        .layer(Extension(state))
}

fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let allow_origin = match origins {
        AllowedOrigins::Any => AllowOrigin::from(Any),
        AllowedOrigins::List(list) => {
            let values: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(%origin, "ignoring unparsable CORS origin");
                        None
                    }
                })
                .collect();
            AllowOrigin::list(values)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

async fn fallback(request: Request) -> HttpError {
    HttpError::unknown_route(request.uri())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
