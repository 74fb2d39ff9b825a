//! Comment model.

use serde::{Deserialize, Serialize};

/// A comment left on an article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub comment_id: i64,
    pub article_id: i64,
    pub author: String,
    pub body: String,
    pub created_at: String,
    pub votes: i64,
}
