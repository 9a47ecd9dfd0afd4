// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use microservices::prelude::*;
//! ```

// Core types
pub use crate::config::{Config, DbConfig, ServerConfig};
pub use crate::error::{AppError, Result};

// HTTP
pub use crate::api::{AppState, PhotoState, create_app_router, create_photo_router};

// Collaborators
pub use crate::db::{PostgresProbe, VersionProbe};
pub use crate::metrics::{MetricsRegistry, RequestLabels};
