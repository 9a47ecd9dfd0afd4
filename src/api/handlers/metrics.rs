use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::PhotoState;
use crate::error::Result;
use crate::metrics::METRICS_CONTENT_TYPE;

/// GET /metrics
pub async fn metrics_handler(State(state): State<Arc<PhotoState>>) -> Result<Response> {
    tracing::debug!("/metrics encode");
    let metrics_text = state.metrics.encode_metrics().await?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, METRICS_CONTENT_TYPE)],
        metrics_text,
    )
        .into_response())
}
