//! Claim Document API - Server Binary
//!
//! ```bash
//! API_PORT=8080 API_JWT_SECRET=... cargo run --bin claim-docs-api
//! ```
//!
//! Configuration comes from `API_`-prefixed variables (see
//! [`interface_api::config::ApiConfig`]); a `.env` file is read first when
//! present.

use std::net::SocketAddr;

use interface_api::{config::ApiConfig, create_router};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env()?;
    init_tracing(&config.log_level);

    if config.uses_dev_secret() {
        warn!("API_JWT_SECRET not set, staff tokens are signed with the development secret");
    }

    let addr: SocketAddr = config.server_addr().parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Claim document API listening");

    axum::serve(listener, create_router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// `RUST_LOG` wins over the configured level
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, draining connections"),
        _ = terminate => info!("Received SIGTERM, draining connections"),
    }
}
