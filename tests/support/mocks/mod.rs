// tests/support/mocks/mod.rs
pub mod stores;
pub mod time;

pub use stores::{FailingStore, StickyCommentStore};
pub use time::{fixed_clock, fixed_now};
