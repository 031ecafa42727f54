use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zw_diagnostic_api::config::Config;
use zw_diagnostic_api::db::Database;
use zw_diagnostic_api::handlers::AppState;
use zw_diagnostic_api::routes;

/// Main entry point for the application.
///
/// Initializes logging, loads configuration, establishes the database
/// connection pool, and starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zw_diagnostic_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize database connection pool
    let db = Database::new(&config.database_url).await?;
    tracing::info!("Database connection pool established");

    // Build application state and router
    let port = config.port;
    let app_state = Arc::new(AppState {
        db: db.pool.clone(),
        config,
    });
    let app = routes::app(app_state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
