// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry and update logic

use crate::error::Result;
use crate::metrics::labels::RequestLabels;
use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::histogram::{Histogram, exponential_buckets};
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Content type matching the OpenMetrics text produced by [`MetricsRegistry::encode_metrics`]
pub const METRICS_CONTENT_TYPE: &str = "application/openmetrics-text; version=1.0.0; charset=utf-8";

/// Process-wide request counters, cheap to clone and share between handlers
///
/// Counter increments are atomic, so concurrent requests never lose updates.
/// Values only grow for the lifetime of the registry.
#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Arc<Mutex<Registry>>,
    requests: Family<RequestLabels, Counter>,
    processing_seconds: Histogram,
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRegistry {
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let requests = Family::<RequestLabels, Counter>::default();
        registry.register(
            "photo_microservice_requests",
            "Total number of requests",
            requests.clone(),
        );

        // 5ms .. ~10s
        let processing_seconds = Histogram::new(exponential_buckets(0.005, 2.0, 12));
        registry.register(
            "photo_microservice_processing_seconds",
            "Time spent on the synthetic photo workload",
            processing_seconds.clone(),
        );

        Self {
            registry: Arc::new(Mutex::new(registry)),
            requests,
            processing_seconds,
        }
    }

    /// Count one handled request for `method` on the route template `endpoint`
    pub fn record_request(&self, method: &str, endpoint: &str) {
        self.requests
            .get_or_create(&RequestLabels::new(method, endpoint))
            .inc();
    }

    pub fn record_processing(&self, duration_secs: f64) {
        self.processing_seconds.observe(duration_secs);
    }

    /// Current count for a (method, endpoint) pair, zero if never seen
    pub fn request_count(&self, method: &str, endpoint: &str) -> u64 {
        self.requests
            .get(&RequestLabels::new(method, endpoint))
            .map_or(0, |counter| counter.get())
    }

    pub async fn encode_metrics(&self) -> Result<String> {
        let registry = self.registry.lock().await;
        let mut buffer = String::new();
        encode(&mut buffer, &registry)?;
        Ok(buffer)
    }
}
