//! Existence checks run before dependent writes.
//!
//! Each check is its own round trip, so a concurrent delete can still slip
//! between a check and the write it guards. The schema's foreign keys catch
//! that case and surface it as [`AppError::Constraint`].

use async_trait::async_trait;
use sqlx::Row;

use super::Repository;
use crate::errors::AppError;

/// A reference to a row, by the only (table, column) pairs the API checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    TopicSlug(&'a str),
    Username(&'a str),
    ArticleId(i64),
    CommentId(i64),
}

impl Lookup<'_> {
    pub fn table(&self) -> &'static str {
        match self {
            Lookup::TopicSlug(_) => "topics",
            Lookup::Username(_) => "users",
            Lookup::ArticleId(_) => "articles",
            Lookup::CommentId(_) => "comments",
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            Lookup::TopicSlug(_) => "slug",
            Lookup::Username(_) => "username",
            Lookup::ArticleId(_) => "article_id",
            Lookup::CommentId(_) => "comment_id",
        }
    }
}

/// Confirms whether a referenced row is present.
#[async_trait]
pub trait ExistenceCheck: Send + Sync {
    async fn exists(&self, lookup: Lookup<'_>) -> Result<bool, AppError>;

    async fn not_exists(&self, lookup: Lookup<'_>) -> Result<bool, AppError> {
        Ok(!self.exists(lookup).await?)
    }
}

/// Fail with `err` unless the row exists.
pub async fn require_exists<C>(checker: &C, lookup: Lookup<'_>, err: AppError) -> Result<(), AppError>
where
    C: ExistenceCheck + ?Sized,
{
    if checker.exists(lookup).await? {
        Ok(())
    } else {
        tracing::debug!(table = lookup.table(), "Referenced row missing");
        Err(err)
    }
}

/// Fail with `err` if the row already exists.
pub async fn require_absent<C>(checker: &C, lookup: Lookup<'_>, err: AppError) -> Result<(), AppError>
where
    C: ExistenceCheck + ?Sized,
{
    if checker.not_exists(lookup).await? {
        Ok(())
    } else {
        tracing::debug!(table = lookup.table(), "Row already present");
        Err(err)
    }
}

#[async_trait]
impl ExistenceCheck for Repository {
    async fn exists(&self, lookup: Lookup<'_>) -> Result<bool, AppError> {
        // Table and column come from the closed `Lookup` enum, never from input.
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ?) AS found",
            lookup.table(),
            lookup.column()
        );
        let query = sqlx::query(&sql);
        let query = match lookup {
            Lookup::TopicSlug(value) | Lookup::Username(value) => query.bind(value),
            Lookup::ArticleId(id) | Lookup::CommentId(id) => query.bind(id),
        };
        let row = query.fetch_one(self.pool()).await?;
        let found: i64 = row.try_get("found")?;
        Ok(found != 0)
    }
}

/// In-memory double used by validation and listing tests.
#[cfg(test)]
pub mod stub {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::{ExistenceCheck, Lookup};
    use crate::errors::AppError;

    #[derive(Debug, Default)]
    pub struct StubChecker {
        pub topics: Vec<String>,
        pub users: Vec<String>,
        pub articles: Vec<i64>,
        pub comments: Vec<i64>,
        calls: AtomicUsize,
    }

    impl StubChecker {
        /// Mirrors the shape of the seeded test data.
        pub fn seeded() -> Self {
            Self {
                topics: vec!["mitch".into(), "cats".into(), "paper".into()],
                users: vec!["butter_bridge".into(), "icellusedkars".into()],
                articles: (1..=12).collect(),
                comments: (1..=18).collect(),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ExistenceCheck for StubChecker {
        async fn exists(&self, lookup: Lookup<'_>) -> Result<bool, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(match lookup {
                Lookup::TopicSlug(slug) => self.topics.iter().any(|t| t == slug),
                Lookup::Username(name) => self.users.iter().any(|u| u == name),
                Lookup::ArticleId(id) => self.articles.contains(&id),
                Lookup::CommentId(id) => self.comments.contains(&id),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::stub::StubChecker;
    use super::*;

    #[test]
    fn test_lookup_targets() {
        assert_eq!(Lookup::TopicSlug("cats").table(), "topics");
        assert_eq!(Lookup::TopicSlug("cats").column(), "slug");
        assert_eq!(Lookup::Username("lurker").table(), "users");
        assert_eq!(Lookup::ArticleId(1).column(), "article_id");
        assert_eq!(Lookup::CommentId(1).table(), "comments");
    }

    #[tokio::test]
    async fn test_require_exists_and_absent() {
        let checker = StubChecker::seeded();

        assert!(require_exists(
            &checker,
            Lookup::TopicSlug("cats"),
            AppError::bad_request("topic does not exist")
        )
        .await
        .is_ok());

        let err = require_exists(
            &checker,
            Lookup::TopicSlug("dogs"),
            AppError::bad_request("topic does not exist"),
        )
        .await
        .unwrap_err();
        assert_eq!(err.client_message(), "topic does not exist");

        let err = require_absent(
            &checker,
            Lookup::TopicSlug("cats"),
            AppError::bad_request("slug already exists!"),
        )
        .await
        .unwrap_err();
        assert_eq!(err.client_message(), "slug already exists!");

        assert_eq!(checker.calls(), 3);
    }
}
