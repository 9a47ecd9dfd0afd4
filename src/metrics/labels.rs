//! Label types for Prometheus metrics

use prometheus_client::encoding::EncodeLabelSet;

/// Key of the request counter: HTTP method and route template
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct RequestLabels {
    pub method: String,
    pub endpoint: String,
}

impl RequestLabels {
    pub fn new(method: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            endpoint: endpoint.into(),
        }
    }
}
