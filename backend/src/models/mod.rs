//! Data models for the news backend.
//!
//! Field names are serialized as stored (`snake_case`) since clients consume
//! the row shapes directly.

mod article;
mod comment;
mod topic;
mod user;

pub use article::*;
pub use comment::*;
pub use topic::*;
pub use user::*;
