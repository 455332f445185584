//! Product Catalog Service - Main Application Entry Point
//!
//! This is a REST API server exposing CRUD operations over an in-memory product catalog, with filtering, pagination, per-category statistics, and API-key-gated writes.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: In-memory `ProductStore` behind a trait object
//! - **Authentication**: Shared secret in the `x-api-key` header (compared as SHA-256 digests)
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create the product store (optionally seeded)
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port until SIGINT/SIGTERM

mod app;
mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod services;
mod store;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{
    app::AppState,
    store::{InMemoryProductStore, SharedStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!(port = config.port, seed_data = config.seed_data, "Configuration loaded");

    if config.uses_default_api_key() {
        tracing::warn!("API_KEY not set, write endpoints accept the default key");
    }

    // Create product store
    let store: SharedStore = if config.seed_data {
        let store = InMemoryProductStore::seeded();
        tracing::info!("Product store seeded with demo catalog");
        Arc::new(store)
    } else {
        Arc::new(InMemoryProductStore::new())
    };

    let app = app::build_router(AppState::new(store, &config.api_key));

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down gracefully"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down gracefully"),
    }
}
