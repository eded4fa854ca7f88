pub mod comments;
pub mod dto;
pub mod error;
pub mod ports;
pub mod posts;
pub mod services;

pub use error::ApplicationResult;
