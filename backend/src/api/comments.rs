//! Comment API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use super::{created, json_body, ApiResult};
use crate::errors::AppError;
use crate::models::Comment;
use crate::validation::{validate_comment_delete, validate_comment_vote};
use crate::AppState;

/// PATCH /api/comments/:comment_id - Apply a vote delta.
pub async fn patch_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Comment> {
    let body = json_body(body)?;
    let (comment_id, delta) = validate_comment_vote(&comment_id, &body)?;

    match state.repo.apply_comment_votes(comment_id, delta).await? {
        Some(comment) => created("comment", comment),
        None => Err(AppError::not_found("no comment with this id")),
    }
}

/// DELETE /api/comments/:comment_id - Delete a comment.
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let comment_id = validate_comment_delete(state.repo.as_ref(), &comment_id).await?;

    if !state.repo.delete_comment(comment_id).await? {
        return Err(AppError::not_found("no comment with this id"));
    }
    tracing::info!(comment_id, "Comment deleted");
    Ok(StatusCode::NO_CONTENT)
}
