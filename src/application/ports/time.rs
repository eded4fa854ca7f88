// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of `published_at` for newly created posts.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
