// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use std::sync::Arc;

use microservices::{AppState, Config, Result, create_app_router, server};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    server::setup_tracing();

    let config = Config::from_env();
    tracing::info!(
        "Database target: {}@{}:{}/{} (connect timeout {}s)",
        config.db.user,
        config.db.host,
        config.db.port,
        config.db.name,
        config.db.connect_timeout().as_secs()
    );

    let addr = config.server.server_addr.clone();
    let app = create_app_router(Arc::new(AppState::new(config)));

    server::serve(
        app,
        &addr,
        "app-microservice",
        &["GET /        - Greeting", "GET /db-test - Database probe"],
    )
    .await
}
