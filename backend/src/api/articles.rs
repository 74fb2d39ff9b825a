//! Article API endpoints.

use std::collections::HashMap;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;

use super::{created, json_body, ok, query_params, ApiResult};
use crate::errors::AppError;
use crate::listing::{validate_article_listing, validate_comment_listing};
use crate::models::{Article, ArticleSummary, ArticleWithCount, Comment};
use crate::validation::{
    parse_number, validate_article_delete, validate_article_vote, validate_new_article,
    validate_new_comment,
};
use crate::AppState;

/// GET /api/articles - Filtered, sorted, paginated listing.
pub async fn list_articles(
    State(state): State<AppState>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> ApiResult<Vec<ArticleSummary>> {
    let params = query_params(query)?;
    let listing = validate_article_listing(state.repo.as_ref(), &params).await?;
    let articles = state.repo.list_articles(&listing).await?;
    ok("articles", articles)
}

/// POST /api/articles - Create an article.
pub async fn create_article(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<ArticleWithCount> {
    let body = json_body(body)?;
    let request = validate_new_article(state.repo.as_ref(), &body).await?;
    let article = state.repo.create_article(&request).await?;
    tracing::info!(article_id = article.article.article_id, "Article created");
    created("article", article)
}

/// GET /api/articles/:article_id - Single article with its comment count.
pub async fn get_article(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> ApiResult<ArticleWithCount> {
    let article_id = parse_number("article_id", &article_id)?;

    match state.repo.get_article(article_id).await? {
        Some(article) => ok("article", article),
        None => Err(AppError::not_found("article not found")),
    }
}

/// PATCH /api/articles/:article_id - Apply a vote delta.
pub async fn patch_article(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Article> {
    let body = json_body(body)?;
    let (article_id, delta) = validate_article_vote(&article_id, &body)?;

    match state.repo.apply_article_votes(article_id, delta).await? {
        Some(article) => created("article", article),
        None => Err(AppError::not_found("article not found")),
    }
}

/// DELETE /api/articles/:article_id - Delete an article and its comments.
pub async fn delete_article(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let article_id = validate_article_delete(state.repo.as_ref(), &article_id).await?;

    if !state.repo.delete_article(article_id).await? {
        // Removed by another request since the existence check.
        return Err(AppError::not_found("no article with this id"));
    }
    tracing::info!(article_id, "Article deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/articles/:article_id/comments - Paginated comments for one article.
pub async fn list_article_comments(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> ApiResult<Vec<Comment>> {
    let params = query_params(query)?;
    let listing = validate_comment_listing(state.repo.as_ref(), &article_id, &params).await?;
    let comments = state.repo.list_comments(&listing).await?;
    ok("comments", comments)
}

/// POST /api/articles/:article_id/comments - Add a comment.
pub async fn create_article_comment(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Comment> {
    let body = json_body(body)?;
    let (article_id, request) = validate_new_comment(state.repo.as_ref(), &article_id, &body).await?;
    let comment = state.repo.create_comment(article_id, &request).await?;
    tracing::info!(article_id, comment_id = comment.comment_id, "Comment created");
    created("comment", comment)
}
