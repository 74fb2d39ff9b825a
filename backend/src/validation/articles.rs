//! Article mutation validators.

use serde_json::Value;

use super::{parse_number, string_field, VoteDelta};
use crate::db::{require_exists, ExistenceCheck, Lookup};
use crate::errors::AppError;

const INCOMPLETE_ARTICLE: &str =
    "Incomplete patch body! Please provide all 4: author, title, body, and topic";

/// A validated `POST /api/articles` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
}

impl NewArticle {
    /// All four fields must be present strings.
    pub fn from_body(body: &Value) -> Result<Self, AppError> {
        let fields = (
            string_field(body, "author"),
            string_field(body, "title"),
            string_field(body, "body"),
            string_field(body, "topic"),
        );
        match fields {
            (Some(author), Some(title), Some(text), Some(topic)) => Ok(Self {
                author: author.to_string(),
                title: title.to_string(),
                body: text.to_string(),
                topic: topic.to_string(),
            }),
            _ => Err(AppError::bad_request(INCOMPLETE_ARTICLE)),
        }
    }
}

/// Validate a new article: field presence, then author, then topic.
pub async fn validate_new_article<C>(checker: &C, body: &Value) -> Result<NewArticle, AppError>
where
    C: ExistenceCheck + ?Sized,
{
    let article = NewArticle::from_body(body)?;

    require_exists(
        checker,
        Lookup::Username(&article.author),
        AppError::bad_request("author does not exist"),
    )
    .await?;
    require_exists(
        checker,
        Lookup::TopicSlug(&article.topic),
        AppError::bad_request("topic does not exist"),
    )
    .await?;

    Ok(article)
}

/// Validate `PATCH /api/articles/:article_id`.
pub fn validate_article_vote(raw_id: &str, body: &Value) -> Result<(i64, VoteDelta), AppError> {
    let article_id = parse_number("article_id", raw_id)?;
    let delta = VoteDelta::from_body(body, "inc_votes must be provided")?;
    Ok((article_id, delta))
}

/// Validate `DELETE /api/articles/:article_id`.
pub async fn validate_article_delete<C>(checker: &C, raw_id: &str) -> Result<i64, AppError>
where
    C: ExistenceCheck + ?Sized,
{
    let article_id = parse_number("article_id", raw_id)?;
    require_exists(
        checker,
        Lookup::ArticleId(article_id),
        AppError::not_found("no article with this id"),
    )
    .await?;
    Ok(article_id)
}
