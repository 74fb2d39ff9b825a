//! Reset the database to a known bundle of rows.
//!
//! Used before every integration test, and at startup when a seed file is
//! configured.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use sqlx::SqlitePool;

use super::{create_schema, drop_schema};
use crate::models::{Topic, User};

/// An article to insert. Ids are assigned in insertion order.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedArticle {
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub votes: i64,
}

/// A comment to insert, pointing at a 1-based article position.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedComment {
    pub article_id: i64,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub votes: i64,
}

/// Everything needed to populate the four tables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    pub topics: Vec<Topic>,
    pub users: Vec<User>,
    pub articles: Vec<SeedArticle>,
    pub comments: Vec<SeedComment>,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to write seed rows: {0}")]
    Database(#[from] sqlx::Error),
}

impl SeedData {
    /// Load a seed bundle from a JSON file.
    pub async fn from_file(path: &Path) -> Result<Self, SeedError> {
        let raw = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Timestamps are stored as ISO-8601 UTC with millisecond precision, the
/// same shape the schema default produces.
fn stored_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Drop and recreate all tables, then insert `data` in one transaction.
pub async fn seed(pool: &SqlitePool, data: &SeedData) -> Result<(), SeedError> {
    drop_schema(pool).await?;
    create_schema(pool).await?;

    let mut tx = pool.begin().await?;

    for topic in &data.topics {
        sqlx::query("INSERT INTO topics (slug, description) VALUES (?, ?)")
            .bind(&topic.slug)
            .bind(&topic.description)
            .execute(&mut *tx)
            .await?;
    }

    for user in &data.users {
        sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES (?, ?, ?)")
            .bind(&user.username)
            .bind(&user.name)
            .bind(&user.avatar_url)
            .execute(&mut *tx)
            .await?;
    }

    for article in &data.articles {
        sqlx::query(
            "INSERT INTO articles (title, topic, author, body, created_at, votes) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&article.title)
        .bind(&article.topic)
        .bind(&article.author)
        .bind(&article.body)
        .bind(stored_timestamp(&article.created_at))
        .bind(article.votes)
        .execute(&mut *tx)
        .await?;
    }

    for comment in &data.comments {
        sqlx::query(
            "INSERT INTO comments (body, article_id, author, votes, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&comment.body)
        .bind(comment.article_id)
        .bind(&comment.author)
        .bind(comment.votes)
        .bind(stored_timestamp(&comment.created_at))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        topics = data.topics.len(),
        users = data.users.len(),
        articles = data.articles.len(),
        comments = data.comments.len(),
        "Database seeded"
    );
    Ok(())
}
