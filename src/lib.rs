// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Microservices
//!
//! Two small HTTP services built on axum:
//!
//! - `app-microservice`: greeting plus a PostgreSQL connectivity probe
//! - `photo-microservice`: greeting, a synthetic CPU-bound photo processing
//!   endpoint and Prometheus request metrics
//!
//! ## Main modules
//! - `api`: HTTP routers, handlers and state
//! - `config`: configuration management
//! - `db`: database version probe
//! - `error`: error types
//! - `metrics`: request counters and registry
//! - `photo`: synthetic processing workload
//! - `server`: logging setup and server loop
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod db;
mod error;
mod metrics;
mod photo;
pub mod prelude;
pub mod server;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, DbConfig, ServerConfig};

/// Application error and result type
pub use error::{AppError, ErrorResponse, Result};

/// HTTP routers, state and response bodies
pub use api::handlers::{APP_GREETING, DbVersionResponse, PHOTO_GREETING, ProcessResponse};
pub use api::{AppState, PhotoState, create_app_router, create_photo_router};

/// Database probe
pub use db::{PostgresProbe, VersionProbe};

/// Metrics registry and labels
pub use metrics::{METRICS_CONTENT_TYPE, MetricsRegistry, RequestLabels};

/// Synthetic workload
pub use photo::{MATRIX_SIZE, format_message, multiply_random_matrices, run_workload};
