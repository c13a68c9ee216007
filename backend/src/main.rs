use quiz_arena::{api, auth, config, create_app, db};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env()?;
    tracing::info!("Starting quiz arena server on {}", config.server_addr());

    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database connected");

    db::run_migrations(&pool).await?;

    if config.seed_demo_data {
        db::seed::seed_demo_rooms(&pool).await?;
    }

    let jwt_manager = Arc::new(auth::JwtManager::new(config.jwt_secret.clone()));

    let state = Arc::new(api::AppState {
        pool,
        jwt_manager,
    });

    let app = create_app(state, &config.cors_allowed_origins);

    let listener = tokio::net::TcpListener::bind(&config.server_addr()).await?;
    tracing::info!("Server listening on {}", config.server_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
