// src/domain/mod.rs
pub mod comment;
pub mod errors;
pub mod post;
pub mod text;

pub use errors::{DomainError, DomainResult};
