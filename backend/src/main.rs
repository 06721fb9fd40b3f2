//! Climate Observation API - Backend Server
//!
//! Serves precipitation, station and temperature summaries from a
//! read-only SQLite dataset.

use anyhow::Context;
use climate_backend::{create_app, db, AppState, Config};
use std::net::SocketAddr;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "climate_server=debug,climate_backend=debug,tower_http=debug,sqlx=warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load().context("failed to load configuration")?;

    tracing::info!("Starting Climate Observation Server");
    tracing::info!("Environment: {}", config.environment);

    // Open the dataset
    tracing::info!("Opening database {}", config.database.url);
    let db_pool = db::connect(&config.database)
        .await
        .with_context(|| format!("failed to open database {}", config.database.url))?;
    db::verify_schema(&db_pool)
        .await
        .context("database does not match the station/measurement schema")?;

    let latest_date = db::latest_measurement_date(&db_pool).await?;
    let window = config.window();
    tracing::info!(
        "Reporting window: after {} up to {} (latest date in data: {:?})",
        window.cutoff_date,
        window.reference_date,
        latest_date
    );
    if latest_date.is_some_and(|latest| latest != window.reference_date) {
        tracing::warn!(
            "Latest measurement date differs from the configured reference date {}",
            window.reference_date
        );
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server address")?;

    // Create application state
    let state = AppState::new(db_pool.clone(), config, latest_date);

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db_pool.close().await;
    tracing::info!("Database closed, shutdown complete");

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
