//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level
//! errors should use `kernel::error::AppError`.

use std::net::SocketAddr;

use clap::Parser;
use hasher::{HasherConfig, hasher_router};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// bcrypt hashing service
#[derive(Parser, Debug)]
#[command(name = "bcrypt-api", version, about = "HTTP endpoints for bcrypt hash and verify")]
struct Cli {
    /// HTTP server address (`host:port`, or `:port` for all interfaces)
    #[arg(long, default_value = ":8080")]
    addr: String,

    /// Reject hash requests above this cost (default: primitive maximum)
    #[arg(long)]
    max_cost: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bcrypt_api=info,hasher=info,kernel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = HasherConfig::with_max_cost(cli.max_cost);

    // Build router (request deadline included)
    let app = hasher_router(config);

    // Start server
    let addr = listen_addr(&cli.addr);
    tracing::info!("Starting server on {}", addr);

    let listener = match TcpListener::bind(addr.as_str()).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, addr = %addr, "Error starting server");
            return Err(e.into());
        }
    };

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Expand `:port` to `0.0.0.0:port`; anything else is bound as given
fn listen_addr(addr: &str) -> String {
    if addr.starts_with(':') {
        format!("0.0.0.0{}", addr)
    } else {
        addr.to_string()
    }
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
