//! User model.

use serde::{Deserialize, Serialize};

/// A registered author of articles and comments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}
