//! Static documentation endpoints.

use axum::Json;
use serde_json::{json, Map, Value};

use super::{ok, ApiResult};
use crate::errors::ErrorResponse;

/// Body of `GET /`.
pub const WELCOME_MESSAGE: &str =
    "Welcome! Please visit /api endpoint to get information about all other endpoints";

/// GET / - Welcome message.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

/// GET /api - Catalog of every endpoint.
pub async fn get_endpoints() -> ApiResult<Value> {
    ok("endpoints", endpoint_catalog())
}

/// Fallback for unmatched paths and unsupported methods.
pub async fn invalid_route() -> (axum::http::StatusCode, Json<ErrorResponse>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            msg: "Invalid route".to_string(),
        }),
    )
}

/// Every route, keyed by `"<METHOD> <path>"`.
pub fn endpoint_catalog() -> Value {
    let mut catalog = Map::new();
    catalog.insert(
        "GET /api".into(),
        json!({
            "description": "serves this description of every available endpoint"
        }),
    );
    catalog.insert(
        "GET /api/topics".into(),
        json!({
            "description": "serves an array of all topics",
            "exampleResponse": {
                "topics": [{ "slug": "football", "description": "Footie!" }]
            }
        }),
    );
    catalog.insert(
        "POST /api/topics".into(),
        json!({
            "description": "adds a topic; the slug must not already exist",
            "exampleRequest": { "slug": "football", "description": "Footie!" },
            "exampleResponse": {
                "topic": { "slug": "football", "description": "Footie!" }
            }
        }),
    );
    catalog.insert(
        "GET /api/articles".into(),
        json!({
            "description": "serves a page of articles with comment counts and the total number of matching articles",
            "queries": ["sort_by", "order", "topic", "limit", "p"],
            "exampleResponse": {
                "articles": [{
                    "article_id": 1,
                    "title": "Seafood substitutions are increasing",
                    "topic": "cooking",
                    "author": "weegembump",
                    "created_at": "2018-05-30T15:59:13.341Z",
                    "votes": 0,
                    "comment_count": 6,
                    "total_count": 1
                }]
            }
        }),
    );
    catalog.insert(
        "POST /api/articles".into(),
        json!({
            "description": "adds an article; author and topic must already exist",
            "exampleRequest": {
                "author": "weegembump",
                "title": "Seafood substitutions are increasing",
                "body": "Text from the article..",
                "topic": "cooking"
            }
        }),
    );
    catalog.insert(
        "GET /api/articles/:article_id".into(),
        json!({
            "description": "serves one article, including its comment_count"
        }),
    );
    catalog.insert(
        "PATCH /api/articles/:article_id".into(),
        json!({
            "description": "adds inc_votes to the article's votes",
            "exampleRequest": { "inc_votes": 1 }
        }),
    );
    catalog.insert(
        "DELETE /api/articles/:article_id".into(),
        json!({
            "description": "deletes an article and its comments, responding with no content"
        }),
    );
    catalog.insert(
        "GET /api/articles/:article_id/comments".into(),
        json!({
            "description": "serves a page of comments for an article, newest first",
            "queries": ["limit", "p"]
        }),
    );
    catalog.insert(
        "POST /api/articles/:article_id/comments".into(),
        json!({
            "description": "adds a comment to an article",
            "exampleRequest": { "username": "weegembump", "body": "Great read" }
        }),
    );
    catalog.insert(
        "GET /api/users".into(),
        json!({
            "description": "serves an array of all users"
        }),
    );
    catalog.insert(
        "GET /api/users/:username".into(),
        json!({
            "description": "serves one user, or an empty object if there is no such user"
        }),
    );
    catalog.insert(
        "PATCH /api/comments/:comment_id".into(),
        json!({
            "description": "adds inc_votes to the comment's votes",
            "exampleRequest": { "inc_votes": -1 }
        }),
    );
    catalog.insert(
        "DELETE /api/comments/:comment_id".into(),
        json!({
            "description": "deletes a comment, responding with no content"
        }),
    );
    Value::Object(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_article_queries() {
        let catalog = endpoint_catalog();
        assert_eq!(
            catalog["GET /api/articles"]["queries"],
            json!(["sort_by", "order", "topic", "limit", "p"])
        );
        assert!(catalog.get("DELETE /api/comments/:comment_id").is_some());
    }
}
