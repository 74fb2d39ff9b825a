//! User API endpoints.

use axum::extract::{Path, State};
use serde::Serialize;

use super::{ok, ApiResult};
use crate::models::User;
use crate::AppState;

/// A user lookup result. A missing user serializes as `{}`, not a 404.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum UserLookup {
    Found(User),
    Missing {},
}

/// GET /api/users - List all users.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    let users = state.repo.list_users().await?;
    ok("users", users)
}

/// GET /api/users/:username - Single user, or an empty object.
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<UserLookup> {
    let user = match state.repo.get_user(&username).await? {
        Some(user) => UserLookup::Found(user),
        None => UserLookup::Missing {},
    };
    ok("user", user)
}
