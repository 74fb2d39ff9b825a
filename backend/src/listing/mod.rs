//! Query construction for the listing endpoints.
//!
//! A query-string map is validated once into an [`ArticleListing`] or
//! [`CommentListing`]; the SQL builders below only ever see those typed
//! values, so the sort column and direction can only come from closed enums
//! and every user-supplied value is a bound parameter.

mod articles;
mod comments;

pub use articles::*;
pub use comments::*;

use std::collections::HashMap;

use crate::errors::AppError;
use crate::validation::parse_number;

/// Page size used when `limit` is absent.
pub const DEFAULT_LIMIT: i64 = 10;

/// Reject the whole request if any key falls outside `allowed`.
pub fn reject_unknown_keys(
    params: &HashMap<String, String>,
    allowed: &[&str],
) -> Result<(), AppError> {
    if let Some(key) = params.keys().find(|k| !allowed.contains(&k.as_str())) {
        tracing::debug!(key = %key, "Unrecognized query key");
        return Err(AppError::bad_request("invalid query"));
    }
    Ok(())
}

/// A validated limit/offset pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Page {
    /// Parse the raw `limit` and 1-indexed `p` values.
    ///
    /// `limit` defaults to [`DEFAULT_LIMIT`]; a missing `p` means offset 0.
    pub fn parse(limit: Option<&str>, p: Option<&str>) -> Result<Self, AppError> {
        let limit = match limit {
            Some(raw) => {
                let value = parse_number("limit", raw)?;
                if value < 0 {
                    return Err(AppError::bad_request("limit must be a positive number"));
                }
                value
            }
            None => DEFAULT_LIMIT,
        };

        let offset = match p {
            Some(raw) => {
                let page = parse_number("p", raw)?;
                if page < 1 {
                    return Err(AppError::bad_request("p must be a positive number"));
                }
                limit.saturating_mul(page - 1)
            }
            None => 0,
        };

        Ok(Self { limit, offset })
    }
}
