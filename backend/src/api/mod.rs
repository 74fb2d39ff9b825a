//! REST API module.
//!
//! Handlers forward route parameters and bodies to the validators, call the
//! repository, and wrap the result in a single-key JSON object such as
//! `{ "article": { ... } }`.

mod articles;
mod comments;
mod endpoints;
mod topics;
mod users;

pub use articles::*;
pub use comments::*;
pub use endpoints::*;
pub use topics::*;
pub use users::*;

use std::collections::HashMap;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{ser::SerializeMap, Serialize, Serializer};
use serde_json::Value;

use crate::errors::AppError;

/// A response body holding one named value, sent with `status`.
#[derive(Debug)]
pub struct Envelope<T> {
    status: StatusCode,
    key: &'static str,
    value: T,
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.value)?;
        map.end()
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status, Json(&self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<Envelope<T>, AppError>;

/// 200 with `{ key: value }`.
pub fn ok<T: Serialize>(key: &'static str, value: T) -> ApiResult<T> {
    Ok(Envelope {
        status: StatusCode::OK,
        key,
        value,
    })
}

/// 201 with `{ key: value }`.
pub fn created<T: Serialize>(key: &'static str, value: T) -> ApiResult<T> {
    Ok(Envelope {
        status: StatusCode::CREATED,
        key,
        value,
    })
}

/// Unwrap a JSON body, turning framework rejections into `{msg}` errors.
///
/// A request without a JSON content type is treated as an empty object so
/// the validators report which fields are missing.
pub(crate) fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Value::Object(Default::default())),
        Err(rejection) => {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            Err(AppError::bad_request("invalid request body"))
        }
    }
}

/// Unwrap a query string into raw key/value pairs.
pub(crate) fn query_params(
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<HashMap<String, String>, AppError> {
    match query {
        Ok(Query(params)) => Ok(params),
        Err(rejection) => {
            tracing::debug!("Rejected query string: {}", rejection.body_text());
            Err(AppError::bad_request("invalid query"))
        }
    }
}
