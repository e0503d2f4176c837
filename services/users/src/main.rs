use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod access;
mod error;
mod jwt;
mod middleware;
mod models;
mod nickname;
mod rate_limiter;
mod repositories;
mod routes;
mod schemas;
mod validation;

use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::jwt::JwtService;

/// Embedded linear migrations from `migrations/`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_service: JwtService,
    pub user_repository: crate::repositories::UserRepository,
    pub rate_limiter: crate::rate_limiter::RateLimiter,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting users service");

    // Initialize database connection pool
    let db_config = common::database::DatabaseConfig::from_env()?;
    let pool = common::database::init_pool(&db_config).await?;

    // Check database connectivity
    if common::database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Apply pending migrations
    common::database::run_migrations(&pool, &MIGRATOR).await?;

    // Initialize JWT service
    let jwt_config = crate::jwt::JwtConfig::from_env()?;
    let jwt_service = crate::jwt::JwtService::new(jwt_config);

    let user_repository = crate::repositories::UserRepository::new(pool.clone());
    let rate_limiter =
        crate::rate_limiter::RateLimiter::new(crate::rate_limiter::RateLimiterConfig::default());

    let app_state = AppState {
        db_pool: pool,
        jwt_service,
        user_repository,
        rate_limiter,
    };

    info!("Users service initialized successfully");

    // Start the web server
    let app = routes::create_router(app_state);

    let addr = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr).await?;
    info!("Users service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
