//! `GET /api/articles` validation and SQL.

use std::collections::HashMap;

use sqlx::{QueryBuilder, Sqlite};

use super::{reject_unknown_keys, Page};
use crate::db::{require_exists, ExistenceCheck, Lookup};
use crate::errors::AppError;

/// Query keys accepted by the article listing.
pub const ARTICLE_QUERY_KEYS: &[&str] = &["sort_by", "order", "topic", "limit", "p"];

/// Columns the article listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    Author,
    Title,
    ArticleId,
    Topic,
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
}

impl SortBy {
    pub const ALL: [SortBy; 7] = [
        SortBy::Author,
        SortBy::Title,
        SortBy::ArticleId,
        SortBy::Topic,
        SortBy::CreatedAt,
        SortBy::Votes,
        SortBy::CommentCount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Author => "author",
            SortBy::Title => "title",
            SortBy::ArticleId => "article_id",
            SortBy::Topic => "topic",
            SortBy::CreatedAt => "created_at",
            SortBy::Votes => "votes",
            SortBy::CommentCount => "comment_count",
        }
    }

    /// Case-insensitive match against the whitelist.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(raw))
    }

    /// The SQL expression this key sorts on.
    fn column(&self) -> &'static str {
        match self {
            SortBy::Author => "articles.author",
            SortBy::Title => "articles.title",
            SortBy::ArticleId => "articles.article_id",
            SortBy::Topic => "articles.topic",
            SortBy::CreatedAt => "articles.created_at",
            SortBy::Votes => "articles.votes",
            SortBy::CommentCount => "comment_count",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("asc") {
            Some(SortOrder::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Some(SortOrder::Desc)
        } else {
            None
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// A fully validated article listing request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleListing {
    pub sort_by: SortBy,
    pub order: SortOrder,
    pub topic: Option<String>,
    pub page: Page,
}

/// Validate the article listing query string.
///
/// Checks run in a fixed order: unknown keys, `sort_by`, `order`, `topic`
/// (one existence check), `limit`, `p`. The first failure wins.
pub async fn validate_article_listing<C>(
    checker: &C,
    params: &HashMap<String, String>,
) -> Result<ArticleListing, AppError>
where
    C: ExistenceCheck + ?Sized,
{
    reject_unknown_keys(params, ARTICLE_QUERY_KEYS)?;

    let sort_by = match params.get("sort_by") {
        Some(raw) => SortBy::parse(raw).ok_or_else(|| AppError::bad_request("invalid sort_by"))?,
        None => SortBy::default(),
    };

    let order = match params.get("order") {
        Some(raw) => SortOrder::parse(raw).ok_or_else(|| AppError::bad_request("invalid order"))?,
        None => SortOrder::default(),
    };

    let topic = params.get("topic").cloned();
    if let Some(slug) = &topic {
        require_exists(
            checker,
            Lookup::TopicSlug(slug),
            AppError::bad_request("topic does not exist"),
        )
        .await?;
    }

    let page = Page::parse(
        params.get("limit").map(String::as_str),
        params.get("p").map(String::as_str),
    )?;

    Ok(ArticleListing {
        sort_by,
        order,
        topic,
        page,
    })
}

/// Build the listing statement.
///
/// Clause order is join, filter, group, order, limit/offset. `total_count`
/// counts every article, ignoring both the topic filter and pagination.
pub fn article_listing_query(listing: &ArticleListing) -> QueryBuilder<'static, Sqlite> {
    let mut query = QueryBuilder::new(
        "SELECT articles.article_id, articles.author, articles.title, articles.topic, \
         articles.created_at, articles.votes, \
         COUNT(comments.comment_id) AS comment_count, \
         (SELECT COUNT(*) FROM articles) AS total_count \
         FROM articles \
         LEFT JOIN comments ON comments.article_id = articles.article_id",
    );
    if let Some(topic) = &listing.topic {
        query.push(" WHERE articles.topic = ").push_bind(topic.clone());
    }

    let direction = listing.order.as_sql();
    query
        .push(" GROUP BY articles.article_id ORDER BY ")
        .push(listing.sort_by.column())
        .push(" ")
        .push(direction);
    if listing.sort_by != SortBy::ArticleId {
        // Stable pages when the sort key has ties.
        query.push(", articles.article_id ").push(direction);
    }

    query
        .push(" LIMIT ")
        .push_bind(listing.page.limit)
        .push(" OFFSET ")
        .push_bind(listing.page.offset);

    query
}
