//! Portfolio Contact Server
//!
//! The long-running deployment shape: an HTTP server hosting the contact
//! intake endpoint and the admin message API over the configured store.

mod app;
mod error;
mod extractors;
mod handlers;

use anyhow::{Context, Result};
use portfolio_core::{Config, StoreConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use app::AppState;
use portfolio_core::ports::SharedSecretGuard;

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "Starting Portfolio Contact Server v{}",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    info!("Loading configuration...");
    let config = Config::from_env().context("Failed to load configuration")?;
    let backend = match &config.store {
        StoreConfig::Sqlite { database_path } => format!("sqlite ({})", database_path),
        StoreConfig::Supabase { url, .. } => format!("supabase ({})", url),
    };
    info!(
        "Config loaded: bind={}, backend={}",
        config.bind_address, backend
    );

    info!("Opening message store...");
    let store = portfolio_store::open(&config.store)
        .await
        .context("Failed to open message store")?;
    info!("Message store ready");

    let state = AppState {
        store: store.clone(),
        guard: Arc::new(SharedSecretGuard::new(config.admin_api_key)),
    };

    let app = app::app(state);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // Flush the store before the process exits; for the embedded backend
    // this checkpoints the database image to its file.
    info!("Shutting down, flushing message store...");
    store.close().await;
    info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
