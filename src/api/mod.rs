//! HTTP API module for the microservices
//!
//! # DB-probe service
//! - `GET /` — greeting
//! - `GET /db-test` — database connectivity probe
//!
//! # Photo service
//! - `GET /` — greeting
//! - `POST /process-photo` — multipart upload, synthetic processing
//! - `GET /metrics` — Prometheus metrics

pub mod handlers;
mod state;

use axum::{
    Router,
    extract::{DefaultBodyLimit, MatchedPath, Request, State},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use std::sync::Arc;

pub use state::{AppState, PhotoState};

/// Creates the router of the DB-probe service
pub fn create_app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::app_index))
        .route("/db-test", get(handlers::db_test))
        .with_state(state)
}

/// Creates the router of the photo service
///
/// Every request served by a route handler is counted, `/metrics` included.
/// The counter sits on each method handler rather than on the whole route, so
/// unknown paths and 405 answers for methods a route does not serve create no
/// series.
pub fn create_photo_router(state: Arc<PhotoState>) -> Router {
    let body_limit = state.config.server.max_upload_bytes;
    let counted = middleware::from_fn_with_state(state.clone(), count_requests);
    Router::new()
        .route(
            "/",
            get(handlers::photo_index).route_layer(counted.clone()),
        )
        .route(
            "/process-photo",
            post(handlers::process_photo).route_layer(counted.clone()),
        )
        .route(
            "/metrics",
            get(handlers::metrics_handler).route_layer(counted),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

async fn count_requests(
    State(state): State<Arc<PhotoState>>,
    request: Request,
    next: Next,
) -> Response {
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str)
        .to_owned();
    state
        .metrics
        .record_request(request.method().as_str(), &endpoint);
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::metrics::MetricsRegistry;

    #[test]
    fn test_create_routers() {
        let config = Config::default();

        let _app = create_app_router(Arc::new(AppState::new(config.clone())));
        let _photo = create_photo_router(Arc::new(PhotoState::new(
            config,
            MetricsRegistry::new(),
        )));
        // If we get here without panicking, the routers were created successfully
    }

    #[test]
    fn test_app_state_uses_db_config() {
        let state = AppState::new(Config::default());

        assert_eq!(state.config.server.server_addr, "0.0.0.0:80");
        assert_eq!(state.config.db.name, "customerdb");
    }
}
