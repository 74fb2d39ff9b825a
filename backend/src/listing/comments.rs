//! `GET /api/articles/:article_id/comments` validation and SQL.

use std::collections::HashMap;

use sqlx::{QueryBuilder, Sqlite};

use super::{reject_unknown_keys, Page};
use crate::db::{require_exists, ExistenceCheck, Lookup};
use crate::errors::AppError;
use crate::validation::parse_number;

/// Query keys accepted by the comment listing.
pub const COMMENT_QUERY_KEYS: &[&str] = &["limit", "p"];

/// A fully validated comment listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentListing {
    pub article_id: i64,
    pub page: Page,
}

/// Validate the route id and query string, in that order, confirming the
/// article exists before the page is parsed.
pub async fn validate_comment_listing<C>(
    checker: &C,
    raw_article_id: &str,
    params: &HashMap<String, String>,
) -> Result<CommentListing, AppError>
where
    C: ExistenceCheck + ?Sized,
{
    reject_unknown_keys(params, COMMENT_QUERY_KEYS)?;

    let article_id = parse_number("article_id", raw_article_id)?;
    require_exists(
        checker,
        Lookup::ArticleId(article_id),
        AppError::not_found("no article with that id"),
    )
    .await?;

    let page = Page::parse(
        params.get("limit").map(String::as_str),
        params.get("p").map(String::as_str),
    )?;

    Ok(CommentListing { article_id, page })
}

/// Newest comments first; `comment_id` breaks timestamp ties.
pub fn comment_listing_query(listing: &CommentListing) -> QueryBuilder<'static, Sqlite> {
    let mut query = QueryBuilder::new(
        "SELECT comment_id, article_id, author, body, created_at, votes \
         FROM comments WHERE article_id = ",
    );
    query
        .push_bind(listing.article_id)
        .push(" ORDER BY created_at DESC, comment_id DESC LIMIT ")
        .push_bind(listing.page.limit)
        .push(" OFFSET ")
        .push_bind(listing.page.offset);
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::stub::StubChecker;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_valid_listing() {
        let checker = StubChecker::seeded();
        let listing = validate_comment_listing(&checker, "1", &params(&[("limit", "3"), ("p", "2")]))
            .await
            .unwrap();
        assert_eq!(listing.article_id, 1);
        assert_eq!(listing.page, Page { limit: 3, offset: 3 });
    }

    #[tokio::test]
    async fn test_rejections() {
        let checker = StubChecker::seeded();

        let err = validate_comment_listing(&checker, "1", &params(&[("sort_by", "votes")]))
            .await
            .unwrap_err();
        assert_eq!(err.client_message(), "invalid query");

        let err = validate_comment_listing(&checker, "one", &params(&[]))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.client_message(), "article_id must be a number");

        let err = validate_comment_listing(&checker, "99", &params(&[]))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.client_message(), "no article with that id");

        let err = validate_comment_listing(&checker, "1", &params(&[("p", "x")]))
            .await
            .unwrap_err();
        assert_eq!(err.client_message(), "p must be a number");
    }

    #[test]
    fn test_query_shape() {
        let listing = CommentListing {
            article_id: 1,
            page: Page::default(),
        };
        let query = comment_listing_query(&listing);
        assert_eq!(
            query.sql(),
            "SELECT comment_id, article_id, author, body, created_at, votes \
             FROM comments WHERE article_id = ? \
             ORDER BY created_at DESC, comment_id DESC LIMIT ? OFFSET ?"
        );
    }
}
