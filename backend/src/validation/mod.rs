//! Request validation for mutations.
//!
//! Route parameters and JSON bodies arrive untyped. Each validator turns them
//! into a typed request in one pass, or fails with the exact error the client
//! should see, before any write is issued.

mod articles;
mod comments;
mod topics;

pub use articles::*;
pub use comments::*;
pub use topics::*;

use serde_json::Value;

use crate::errors::AppError;

/// Coerce a route or query value to an integer.
///
/// Fails with `"<field> must be a number"`.
pub fn parse_number(field: &str, raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::bad_request(format!("{field} must be a number")))
}

/// A signed amount to add to a `votes` counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteDelta(i64);

impl VoteDelta {
    pub fn value(self) -> i64 {
        self.0
    }

    /// Read `inc_votes` from a PATCH body. Other fields are ignored.
    ///
    /// A missing (or null) key fails with `missing_msg`, which differs per
    /// endpoint; a present value that is not an integer fails with
    /// `"inc_votes must be a number"`. Both are 422.
    pub fn from_body(body: &Value, missing_msg: &str) -> Result<Self, AppError> {
        let not_a_number = || AppError::unprocessable("inc_votes must be a number");

        match body.get("inc_votes") {
            None | Some(Value::Null) => Err(AppError::unprocessable(missing_msg)),
            Some(Value::Number(n)) => {
                if let Some(v) = n.as_i64() {
                    Ok(Self(v))
                } else {
                    match n.as_f64() {
                        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                            Ok(Self(f as i64))
                        }
                        _ => Err(not_a_number()),
                    }
                }
            }
            Some(Value::String(s)) => s
                .trim()
                .parse::<i64>()
                .map(Self)
                .map_err(|_| not_a_number()),
            Some(_) => Err(not_a_number()),
        }
    }
}

/// Borrow a string field from a JSON object body.
///
/// Absent, null and non-string values all count as missing.
pub(crate) fn string_field<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key).and_then(Value::as_str)
}
