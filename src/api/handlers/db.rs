use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::AppState;
use crate::error::Result;

/// Successful probe response
#[derive(Debug, Serialize, Deserialize)]
pub struct DbVersionResponse {
    pub db_version: String,
}

/// GET /db-test
///
/// Opens a database connection, reports the server version and closes the
/// connection again. Any failure is returned as a 500 with an `error` field.
pub async fn db_test(State(state): State<Arc<AppState>>) -> Result<Json<DbVersionResponse>> {
    let db_version = state.probe.server_version().await?;
    tracing::debug!("Database probe succeeded: {}", db_version);
    Ok(Json(DbVersionResponse { db_version }))
}
