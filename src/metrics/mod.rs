// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Request metrics for the photo service
//!
//! Contains the label type and the Prometheus registry shared by handlers.

mod labels;
mod registry;

#[cfg(test)]
mod tests;

/// Labels for per-route request counters
pub use labels::RequestLabels;

/// Prometheus metrics registry
pub use registry::{METRICS_CONTENT_TYPE, MetricsRegistry};
