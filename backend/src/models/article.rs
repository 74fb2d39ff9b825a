//! Article models.
//!
//! The stored row never carries `comment_count`; it is derived at read time,
//! so the shapes that include it wrap or extend the plain row.

use serde::{Deserialize, Serialize};

/// An article exactly as stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub article_id: i64,
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub created_at: String,
    pub votes: i64,
}

/// An article together with its derived comment count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleWithCount {
    #[serde(flatten)]
    pub article: Article,
    pub comment_count: i64,
}

/// One row of the paginated article listing.
///
/// `total_count` is the number of stored articles, unaffected by the topic
/// filter or the page; it is repeated on every row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleSummary {
    pub article_id: i64,
    pub author: String,
    pub title: String,
    pub topic: String,
    pub created_at: String,
    pub votes: i64,
    pub comment_count: i64,
    pub total_count: i64,
}
