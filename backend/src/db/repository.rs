//! Database repository for reads and writes.
//!
//! Each method is a single statement; validation and existence checks happen
//! before these are called.

use sqlx::sqlite::SqliteRow;
use sqlx::{error::ErrorKind, Row, SqlitePool};

use crate::errors::AppError;
use crate::listing::{article_listing_query, comment_listing_query, ArticleListing, CommentListing};
use crate::models::{Article, ArticleSummary, ArticleWithCount, Comment, Topic, User};
use crate::validation::{NewArticle, NewComment, NewTopic, VoteDelta};

const ARTICLE_COLUMNS: &str = "article_id, author, title, body, topic, created_at, votes";
const COMMENT_COLUMNS: &str = "comment_id, article_id, author, body, created_at, votes";

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // ==================== TOPIC OPERATIONS ====================

    /// List all topics.
    pub async fn list_topics(&self) -> Result<Vec<Topic>, AppError> {
        let rows = sqlx::query("SELECT slug, description FROM topics ORDER BY slug")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(topic_from_row).collect::<Result<_, _>>()?)
    }

    /// Insert a topic. The caller has already confirmed the slug is free.
    pub async fn create_topic(&self, topic: &NewTopic) -> Result<Topic, AppError> {
        let row = sqlx::query(
            "INSERT INTO topics (slug, description) VALUES (?, ?) RETURNING slug, description",
        )
        .bind(&topic.slug)
        .bind(&topic.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(topic_from_row(&row)?)
    }

    // ==================== USER OPERATIONS ====================

    /// List all users.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query("SELECT username, name, avatar_url FROM users ORDER BY username")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(user_from_row).collect::<Result<_, _>>()?)
    }

    /// Get a user by username.
    pub async fn get_user(&self, username: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query("SELECT username, name, avatar_url FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(user_from_row).transpose()?)
    }

    // ==================== ARTICLE OPERATIONS ====================

    /// Run the paginated article listing.
    pub async fn list_articles(
        &self,
        listing: &ArticleListing,
    ) -> Result<Vec<ArticleSummary>, AppError> {
        let mut query = article_listing_query(listing);
        let rows = query.build().fetch_all(&self.pool).await?;

        Ok(rows
            .iter()
            .map(article_summary_from_row)
            .collect::<Result<_, _>>()?)
    }

    /// Get an article by id with its comment count.
    ///
    /// Left join, so an article without comments reports `comment_count: 0`.
    pub async fn get_article(&self, article_id: i64) -> Result<Option<ArticleWithCount>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT articles.article_id, articles.author, articles.title, articles.body,
                   articles.topic, articles.created_at, articles.votes,
                   COUNT(comments.comment_id) AS comment_count
            FROM articles
            LEFT JOIN comments ON comments.article_id = articles.article_id
            WHERE articles.article_id = ?
            GROUP BY articles.article_id
            "#,
        )
        .bind(article_id)
        .fetch_optional(&self.pool)
        .await?;

        let article = row
            .as_ref()
            .map(|row| -> Result<_, sqlx::Error> {
                Ok(ArticleWithCount {
                    article: article_from_row(row)?,
                    comment_count: row.try_get("comment_count")?,
                })
            })
            .transpose()?;
        Ok(article)
    }

    /// Insert an article. Votes and comment count both start at zero.
    pub async fn create_article(&self, article: &NewArticle) -> Result<ArticleWithCount, AppError> {
        let row = sqlx::query(&format!(
            "INSERT INTO articles (author, title, body, topic) VALUES (?, ?, ?, ?) RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(&article.author)
        .bind(&article.title)
        .bind(&article.body)
        .bind(&article.topic)
        .fetch_one(&self.pool)
        .await?;

        Ok(ArticleWithCount {
            article: article_from_row(&row)?,
            comment_count: 0,
        })
    }

    /// Apply a vote delta in one statement. `None` if no such article.
    pub async fn apply_article_votes(
        &self,
        article_id: i64,
        delta: VoteDelta,
    ) -> Result<Option<Article>, AppError> {
        let row = sqlx::query(&format!(
            "UPDATE articles SET votes = votes + ? WHERE article_id = ? RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(delta.value())
        .bind(article_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(vote_error)?;

        Ok(row.as_ref().map(article_from_row).transpose()?)
    }

    /// Delete an article and, by cascade, its comments.
    pub async fn delete_article(&self, article_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM articles WHERE article_id = ?")
            .bind(article_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ==================== COMMENT OPERATIONS ====================

    /// Run the paginated comment listing for one article.
    pub async fn list_comments(&self, listing: &CommentListing) -> Result<Vec<Comment>, AppError> {
        let mut query = comment_listing_query(listing);
        let rows = query.build().fetch_all(&self.pool).await?;

        Ok(rows.iter().map(comment_from_row).collect::<Result<_, _>>()?)
    }

    /// Insert a comment on an article.
    pub async fn create_comment(
        &self,
        article_id: i64,
        comment: &NewComment,
    ) -> Result<Comment, AppError> {
        let row = sqlx::query(&format!(
            "INSERT INTO comments (author, body, article_id) VALUES (?, ?, ?) RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(&comment.username)
        .bind(&comment.body)
        .bind(article_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment_from_row(&row)?)
    }

    /// Apply a vote delta in one statement. `None` if no such comment.
    pub async fn apply_comment_votes(
        &self,
        comment_id: i64,
        delta: VoteDelta,
    ) -> Result<Option<Comment>, AppError> {
        let row = sqlx::query(&format!(
            "UPDATE comments SET votes = votes + ? WHERE comment_id = ? RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(delta.value())
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(vote_error)?;

        Ok(row.as_ref().map(comment_from_row).transpose()?)
    }

    /// Delete a comment.
    pub async fn delete_comment(&self, comment_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = ?")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// A vote total that leaves the integer range is stored as REAL by SQLite,
/// which the `votes` CHECK constraint rejects.
fn vote_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if matches!(db_err.kind(), ErrorKind::CheckViolation) => {
            tracing::debug!("Vote total out of range: {}", db_err);
            AppError::unprocessable("inc_votes is out of range")
        }
        _ => err.into(),
    }
}

// ==================== ROW MAPPING ====================

fn topic_from_row(row: &SqliteRow) -> Result<Topic, sqlx::Error> {
    Ok(Topic {
        slug: row.try_get("slug")?,
        description: row.try_get("description")?,
    })
}

fn user_from_row(row: &SqliteRow) -> Result<User, sqlx::Error> {
    Ok(User {
        username: row.try_get("username")?,
        name: row.try_get("name")?,
        avatar_url: row.try_get("avatar_url")?,
    })
}

fn article_from_row(row: &SqliteRow) -> Result<Article, sqlx::Error> {
    Ok(Article {
        article_id: row.try_get("article_id")?,
        author: row.try_get("author")?,
        title: row.try_get("title")?,
        body: row.try_get("body")?,
        topic: row.try_get("topic")?,
        created_at: row.try_get("created_at")?,
        votes: row.try_get("votes")?,
    })
}

fn article_summary_from_row(row: &SqliteRow) -> Result<ArticleSummary, sqlx::Error> {
    Ok(ArticleSummary {
        article_id: row.try_get("article_id")?,
        author: row.try_get("author")?,
        title: row.try_get("title")?,
        topic: row.try_get("topic")?,
        created_at: row.try_get("created_at")?,
        votes: row.try_get("votes")?,
        comment_count: row.try_get("comment_count")?,
        total_count: row.try_get("total_count")?,
    })
}

fn comment_from_row(row: &SqliteRow) -> Result<Comment, sqlx::Error> {
    Ok(Comment {
        comment_id: row.try_get("comment_id")?,
        article_id: row.try_get("article_id")?,
        author: row.try_get("author")?,
        body: row.try_get("body")?,
        created_at: row.try_get("created_at")?,
        votes: row.try_get("votes")?,
    })
}
