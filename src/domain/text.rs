// src/domain/text.rs
use crate::domain::errors::{DomainError, DomainResult};

pub const BLANK_MESSAGE: &str = "must not be blank";

/// Character bounds shared by every free-text field of the blog model.
#[derive(Debug, Clone, Copy)]
pub struct TextRule {
    pub field: &'static str,
    pub min: usize,
    pub max: usize,
    pub message: &'static str,
}

impl TextRule {
    /// Checks blankness first, then the length in characters (not bytes).
    pub fn check(&self, value: String) -> DomainResult<String> {
        if value.trim().is_empty() {
            return Err(DomainError::validation(self.field, BLANK_MESSAGE));
        }

        let len = value.chars().count();
        if len < self.min || len > self.max {
            return Err(DomainError::validation(self.field, self.message));
        }

        Ok(value)
    }
}

/// Positive identifier check used by both entity id types.
pub fn positive_id(field: &'static str, message: &'static str, id: i64) -> DomainResult<i64> {
    if id <= 0 {
        Err(DomainError::validation(field, message))
    } else {
        Ok(id)
    }
}
