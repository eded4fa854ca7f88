// src/application/error.rs
use crate::domain::{comment::CommentId, errors::DomainError, post::PostId};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// The entity a not-found failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Post,
    Comment,
}

/// Coarse classification consumed by the boundary layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound(Entity),
    PersistenceFailure,
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation error: {field} | {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("post with id {id} not found")]
    PostNotFound { id: PostId },

    #[error("comment with id {id} not found for post {post_id}")]
    CommentNotFound { post_id: PostId, id: CommentId },

    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl ApplicationError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn post_not_found(id: PostId) -> Self {
        Self::PostNotFound { id }
    }

    pub fn comment_not_found(post_id: PostId, id: CommentId) -> Self {
        Self::CommentNotFound { post_id, id }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::PostNotFound { .. } => ErrorKind::NotFound(Entity::Post),
            Self::CommentNotFound { .. } => ErrorKind::NotFound(Entity::Comment),
            Self::Persistence(_) => ErrorKind::PersistenceFailure,
        }
    }

    /// Name of the offending input field, for validation failures only.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { field, message } => Self::Validation { field, message },
            DomainError::Persistence(msg) => Self::Persistence(msg),
        }
    }
}
