//! Comment mutation validators.

use serde_json::Value;

use super::{parse_number, string_field, VoteDelta};
use crate::db::{require_exists, ExistenceCheck, Lookup};
use crate::errors::AppError;

/// A validated `POST /api/articles/:article_id/comments` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub username: String,
    pub body: String,
}

impl NewComment {
    pub fn from_body(body: &Value) -> Result<Self, AppError> {
        let username = string_field(body, "username")
            .ok_or_else(|| AppError::bad_request("please provide username"))?;
        let text = string_field(body, "body")
            .ok_or_else(|| AppError::bad_request("please provide body"))?;

        Ok(Self {
            username: username.to_string(),
            body: text.to_string(),
        })
    }
}

/// Validate a new comment: id, fields, then the article and the author.
pub async fn validate_new_comment<C>(
    checker: &C,
    raw_article_id: &str,
    body: &Value,
) -> Result<(i64, NewComment), AppError>
where
    C: ExistenceCheck + ?Sized,
{
    let article_id = parse_number("article_id", raw_article_id)?;
    let comment = NewComment::from_body(body)?;

    require_exists(
        checker,
        Lookup::ArticleId(article_id),
        AppError::not_found("no article with that id"),
    )
    .await?;
    require_exists(
        checker,
        Lookup::Username(&comment.username),
        AppError::not_found("username does not exist"),
    )
    .await?;

    Ok((article_id, comment))
}

/// Validate `PATCH /api/comments/:comment_id`.
pub fn validate_comment_vote(raw_id: &str, body: &Value) -> Result<(i64, VoteDelta), AppError> {
    let comment_id = parse_number("comment_id", raw_id)?;
    let delta = VoteDelta::from_body(body, "please provide inc_votes")?;
    Ok((comment_id, delta))
}

/// Validate `DELETE /api/comments/:comment_id`.
pub async fn validate_comment_delete<C>(checker: &C, raw_id: &str) -> Result<i64, AppError>
where
    C: ExistenceCheck + ?Sized,
{
    let comment_id = parse_number("comment_id", raw_id)?;
    require_exists(
        checker,
        Lookup::CommentId(comment_id),
        AppError::not_found("no comment with this id"),
    )
    .await?;
    Ok(comment_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::stub::StubChecker;
    use serde_json::json;

    #[tokio::test]
    async fn test_valid_comment() {
        let checker = StubChecker::seeded();
        let body = json!({ "username": "icellusedkars", "body": "Nice one", "votes": 50 });
        let (id, comment) = validate_new_comment(&checker, "2", &body).await.unwrap();
        assert_eq!(id, 2);
        assert_eq!(comment.username, "icellusedkars");
        assert_eq!(comment.body, "Nice one");
    }

    #[tokio::test]
    async fn test_missing_fields() {
        let checker = StubChecker::seeded();

        let err = validate_new_comment(&checker, "1", &json!({ "body": "hi" }))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.client_message(), "please provide username");

        let err = validate_new_comment(&checker, "1", &json!({ "username": "butter_bridge" }))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.client_message(), "please provide body");

        assert_eq!(checker.calls(), 0);
    }

    #[tokio::test]
    async fn test_article_must_exist() {
        let checker = StubChecker::seeded();
        let body = json!({ "username": "butter_bridge", "body": "hi" });
        let err = validate_new_comment(&checker, "404", &body).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.client_message(), "no article with that id");
    }

    #[tokio::test]
    async fn test_user_must_exist() {
        let checker = StubChecker::seeded();
        let body = json!({ "username": "ghost", "body": "boo" });
        let err = validate_new_comment(&checker, "1", &body).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.client_message(), "username does not exist");
    }

    #[tokio::test]
    async fn test_non_numeric_article_id() {
        let checker = StubChecker::seeded();
        let body = json!({ "username": "butter_bridge", "body": "hi" });
        let err = validate_new_comment(&checker, "banana", &body).await.unwrap_err();
        assert_eq!(err.client_message(), "article_id must be a number");
    }

    #[test]
    fn test_comment_vote_missing_message() {
        let err = validate_comment_vote("1", &json!({ "votes": 3 })).unwrap_err();
        assert_eq!(err.status_code(), 422);
        assert_eq!(err.client_message(), "please provide inc_votes");

        let err = validate_comment_vote("x", &json!({ "inc_votes": 1 })).unwrap_err();
        assert_eq!(err.client_message(), "comment_id must be a number");
    }

    #[tokio::test]
    async fn test_comment_delete() {
        let checker = StubChecker::seeded();
        assert_eq!(validate_comment_delete(&checker, "1").await.unwrap(), 1);

        let err = validate_comment_delete(&checker, "1000").await.unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.client_message(), "no comment with this id");
    }
}
