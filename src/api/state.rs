//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::config::Config;
use crate::db::{PostgresProbe, VersionProbe};
use crate::metrics::MetricsRegistry;

/// State of the DB-probe service
pub struct AppState {
    pub config: Config,
    pub probe: Arc<dyn VersionProbe>,
}

impl AppState {
    /// State backed by a real PostgreSQL probe built from `config.db`
    pub fn new(config: Config) -> Self {
        let probe = Arc::new(PostgresProbe::new(config.db.clone()));
        Self { config, probe }
    }

    pub fn with_probe(config: Config, probe: Arc<dyn VersionProbe>) -> Self {
        Self { config, probe }
    }
}

/// State of the photo service
pub struct PhotoState {
    pub config: Config,
    pub metrics: MetricsRegistry,
}

impl PhotoState {
    pub fn new(config: Config, metrics: MetricsRegistry) -> Self {
        Self { config, metrics }
    }
}
