// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Process shell shared by both binaries: logging setup and the HTTP server loop

use std::net::SocketAddr;

use axum::Router;
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

/// Installs the global tracing subscriber
///
/// `RUST_LOG` controls filtering; without it everything at `info` and above is logged.
pub fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Binds `addr` and serves `app` until Ctrl+C is received
pub async fn serve(app: Router, addr: &str, service: &str, endpoints: &[&str]) -> Result<()> {
    let addr: SocketAddr = addr.parse().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    tracing::info!("{} starting on {}", service, addr);
    tracing::info!("Endpoints:");
    for endpoint in endpoints {
        tracing::info!("  - {}", endpoint);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}
