//! News Backend
//!
//! A REST backend serving topics, articles, comments and users from SQLite.

mod api;
mod config;
mod db;
mod errors;
mod listing;
mod models;
mod validation;

use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::{Repository, SeedData};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(config.log_json.then(|| fmt::layer().json()))
        .with((!config.log_json).then(|| fmt::layer()))
        .init();

    tracing::info!("Starting news backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;

    if let Some(seed_file) = &config.seed_file {
        tracing::info!("Seeding database from {:?}", seed_file);
        let data = SeedData::from_file(seed_file).await?;
        db::seed(&pool, &data).await?;
    }

    let state = AppState {
        repo: Arc::new(Repository::new(pool)),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(api::root))
        .route("/api", get(api::get_endpoints))
        // Topics
        .route("/api/topics", get(api::list_topics).post(api::create_topic))
        // Articles
        .route(
            "/api/articles",
            get(api::list_articles).post(api::create_article),
        )
        .route(
            "/api/articles/{article_id}",
            get(api::get_article)
                .patch(api::patch_article)
                .delete(api::delete_article),
        )
        .route(
            "/api/articles/{article_id}/comments",
            get(api::list_article_comments).post(api::create_article_comment),
        )
        // Comments
        .route(
            "/api/comments/{comment_id}",
            patch(api::patch_comment).delete(api::delete_comment),
        )
        // Users
        .route("/api/users", get(api::list_users))
        .route("/api/users/{username}", get(api::get_user))
        .fallback(api::invalid_route)
        .method_not_allowed_fallback(api::invalid_route)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
