// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Unit tests for the metrics registry

#[cfg(test)]
mod test {
    use crate::metrics::MetricsRegistry;

    #[test]
    fn test_unknown_series_reads_zero() {
        let registry = MetricsRegistry::new();
        assert_eq!(registry.request_count("GET", "/"), 0);
    }

    #[test]
    fn test_record_request_increments_only_its_series() {
        let registry = MetricsRegistry::new();
        registry.record_request("GET", "/");
        registry.record_request("GET", "/");
        registry.record_request("POST", "/process-photo");

        assert_eq!(registry.request_count("GET", "/"), 2);
        assert_eq!(registry.request_count("POST", "/process-photo"), 1);
        assert_eq!(registry.request_count("GET", "/process-photo"), 0);
    }

    #[test]
    fn test_clones_share_counters() {
        let registry = MetricsRegistry::new();
        let clone = registry.clone();
        clone.record_request("GET", "/metrics");

        assert_eq!(registry.request_count("GET", "/metrics"), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_are_not_lost() {
        let registry = MetricsRegistry::new();
        let mut handles = Vec::new();
        for _ in 0..64 {
            let registry = registry.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..100 {
                    registry.record_request("POST", "/process-photo");
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(registry.request_count("POST", "/process-photo"), 6400);
    }

    #[tokio::test]
    async fn test_encode_contains_counter_series() {
        let registry = MetricsRegistry::new();
        registry.record_request("POST", "/process-photo");

        let text = registry.encode_metrics().await.unwrap();
        assert!(text.contains("# TYPE photo_microservice_requests counter"));
        assert!(text.contains(
            "photo_microservice_requests_total{method=\"POST\",endpoint=\"/process-photo\"} 1"
        ));
        assert!(text.ends_with("# EOF\n"));
    }

    #[tokio::test]
    async fn test_encode_contains_processing_histogram() {
        let registry = MetricsRegistry::new();
        registry.record_processing(0.02);

        let text = registry.encode_metrics().await.unwrap();
        assert!(text.contains("photo_microservice_processing_seconds_count 1"));
    }
}
