//! Topic mutation validators.

use serde_json::Value;

use super::string_field;
use crate::db::{require_absent, ExistenceCheck, Lookup};
use crate::errors::AppError;

/// A validated `POST /api/topics` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTopic {
    pub slug: String,
    pub description: String,
}

impl NewTopic {
    pub fn from_body(body: &Value) -> Result<Self, AppError> {
        match (string_field(body, "slug"), string_field(body, "description")) {
            (Some(slug), Some(description)) => Ok(Self {
                slug: slug.to_string(),
                description: description.to_string(),
            }),
            _ => Err(AppError::bad_request(
                "Please provide both slug and description",
            )),
        }
    }
}

/// Validate a new topic and confirm its slug is not taken.
pub async fn validate_new_topic<C>(checker: &C, body: &Value) -> Result<NewTopic, AppError>
where
    C: ExistenceCheck + ?Sized,
{
    let topic = NewTopic::from_body(body)?;
    require_absent(
        checker,
        Lookup::TopicSlug(&topic.slug),
        AppError::bad_request("slug already exists!"),
    )
    .await?;
    Ok(topic)
}
