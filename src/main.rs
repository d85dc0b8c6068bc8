//! Local Library Server
//!
//! Server-rendered catalog management for genres and book copies.

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use locallibrary_server::{
    config::AppConfig, pages, repository::Repository, services::Services, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "locallibrary_server={},tower_http=debug",
            config.logging.level
        )
        .into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Local Library Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse().expect("Invalid host address"), server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/health", get(pages::health_check))
        // Genres
        .route("/genres", get(pages::genres::list))
        .route("/genre/create", get(pages::genres::create_form))
        .route("/genre/create", post(pages::genres::create))
        .route("/genre/delete", post(pages::genres::delete))
        .route("/genre/:id", get(pages::genres::detail))
        .route("/genre/:id/delete", get(pages::genres::delete_form))
        .route("/genre/:id/update", get(pages::genres::update_form))
        .route("/genre/:id/update", post(pages::genres::update))
        // Book instances (copies)
        .route("/bookinstances", get(pages::book_instances::list))
        .route("/bookinstance/create", get(pages::book_instances::create_form))
        .route("/bookinstance/create", post(pages::book_instances::create))
        .route("/bookinstance/delete", post(pages::book_instances::delete))
        .route("/bookinstance/:id", get(pages::book_instances::detail))
        .route(
            "/bookinstance/:id/delete",
            get(pages::book_instances::delete_form),
        )
        .route(
            "/bookinstance/:id/update",
            get(pages::book_instances::update_form),
        )
        .route(
            "/bookinstance/:id/update",
            post(pages::book_instances::update),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}
