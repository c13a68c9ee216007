//! CS Quiz Arena lobby backend
//!
//! Prize-pool and payout computation for quiz rooms, plus the HTTP
//! service and store around it. Exposed as a library for integration testing.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod lobby;

use axum::{http::HeaderValue, routing::get, Router};
use sqlx::sqlite::SqlitePoolOptions;
use std::{sync::Arc, time::Duration};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Creates the application router with all endpoints
pub fn create_app(state: Arc<api::AppState>, cors_allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(|| async { "CS Quiz Arena" }))
        .route("/health", get(|| async { "OK" }))
        .nest("/api/rooms", api::rooms_router().with_state(state))
        .layer(cors)
}

/// Test helper to create an in-memory database and run migrations
pub async fn create_test_db() -> db::DbPool {
    // A single long-lived connection keeps the in-memory database alive
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Test helper to create a fully configured test app.
/// Returns the token manager so tests can act as signed-in users.
pub async fn create_test_app() -> (Router, Arc<auth::JwtManager>) {
    let pool = create_test_db().await;
    let jwt_manager = Arc::new(auth::JwtManager::new("test_secret_key".to_string()));

    let state = Arc::new(api::AppState {
        pool,
        jwt_manager: jwt_manager.clone(),
    });

    let app = create_app(state, &["http://localhost:3000".to_string()]);
    (app, jwt_manager)
}
