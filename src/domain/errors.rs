// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised by value objects and persistence gateways.
///
/// Gateways report absence through `Option`, never through an error; deciding
/// that a missing row is a "not found" failure is the services' job.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {field} | {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence(message.into())
    }
}
