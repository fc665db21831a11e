//! Object Cache - an in-memory JSON object store over HTTP
//!
//! Reads its configuration from the environment (and `.env`), then serves
//! `/object/{key}` until interrupted.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use object_cache::{api::create_router, AppState, Config};

/// Main entry point for the object cache server.
///
/// # Startup Sequence
/// 1. Load configuration from `.env` and environment variables
/// 2. Initialize tracing subscriber (debug level when `DEBUG` is set)
/// 3. Create the cache engine with configured parameters
/// 4. Start HTTP server on configured port
/// 5. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();

    // RUST_LOG wins over the DEBUG flag
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting object cache server");
    info!(
        "Configuration loaded: memory_slots={}, memory_ttl={}s, eviction_policy={}, port={}, debug={}",
        config.memory_slots, config.memory_ttl, config.eviction_policy, config.port, config.debug
    );

    let state = AppState::from_config(&config);
    let engine = state.engine.clone();
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    let stats = engine.stats().await;
    info!(
        "Server shutdown complete: entries={}, hits={}, misses={}, hit_rate={:.2}, evictions={}, rejections={}, expired={}",
        stats.total_entries,
        stats.hits,
        stats.misses,
        stats.hit_rate(),
        stats.evictions,
        stats.rejections,
        stats.expired
    );

    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
