//! Topic API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

use super::{created, json_body, ok, ApiResult};
use crate::models::Topic;
use crate::validation::validate_new_topic;
use crate::AppState;

/// GET /api/topics - List all topics.
pub async fn list_topics(State(state): State<AppState>) -> ApiResult<Vec<Topic>> {
    let topics = state.repo.list_topics().await?;
    ok("topics", topics)
}

/// POST /api/topics - Create a topic with a new slug.
pub async fn create_topic(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Topic> {
    let body = json_body(body)?;
    let request = validate_new_topic(state.repo.as_ref(), &body).await?;
    let topic = state.repo.create_topic(&request).await?;
    tracing::info!(slug = %topic.slug, "Topic created");
    created("topic", topic)
}
