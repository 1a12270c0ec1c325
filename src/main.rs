use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod db;
mod error;
mod handlers;
mod models;

use crate::config::Config;
use crate::db::{CarStore, PgCarStore};

/// Handlers reach the `cars` table only through this store handle.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CarStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,car_inventory_service=debug")
            }),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    info!(database = ?config.database, "Configuration loaded");

    info!("Connecting to PostgreSQL...");
    let pool = db::connect(&config.database).await?;
    info!(
        max_connections = config.database.max_connections,
        "Database connection pool established."
    );

    if config.database.run_migrations {
        db::run_migrations(&pool).await?;
    }

    let state = AppState {
        store: Arc::new(PgCarStore::new(pool)),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))

        // ── Cars ────────────────────────────────────────────────────────────
        .route("/items", get(handlers::cars::list_cars))
        .route("/items/:serial_no", get(handlers::cars::get_car))
        .route("/add-car", post(handlers::cars::add_car))
        .route("/update-car/:serial_no", put(handlers::cars::update_car))
        .route("/delete-car/:name", delete(handlers::cars::delete_car_by_name))
        .route(
            "/delete-car-by-serial/:serial_no",
            delete(handlers::cars::delete_car_by_serial),
        )

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
