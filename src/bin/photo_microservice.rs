// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use std::sync::Arc;

use microservices::{Config, MetricsRegistry, PhotoState, Result, create_photo_router, server};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    server::setup_tracing();

    let config = Config::from_env();
    tracing::info!(
        "Accepting uploads up to {} bytes",
        config.server.max_upload_bytes
    );

    let addr = config.server.server_addr.clone();
    let state = Arc::new(PhotoState::new(config, MetricsRegistry::new()));
    let app = create_photo_router(state);

    server::serve(
        app,
        &addr,
        "photo-microservice",
        &[
            "GET  /              - Greeting",
            "POST /process-photo - Synthetic photo processing",
            "GET  /metrics       - Prometheus metrics",
        ],
    )
    .await
}
