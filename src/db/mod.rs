// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Database connectivity probe
//!
//! Every probe opens its own connection, asks the server for its version and
//! closes the connection again before returning. There is no pooling.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use tokio_postgres::NoTls;

use crate::config::DbConfig;
use crate::error::{AppError, Result};

const VERSION_QUERY: &str = "SELECT version()";

/// Something that can report the version string of a database server
#[async_trait]
pub trait VersionProbe: Send + Sync {
    async fn server_version(&self) -> Result<String>;
}

/// PostgreSQL probe, one fresh connection per call
#[derive(Debug, Clone)]
pub struct PostgresProbe {
    config: DbConfig,
}

impl PostgresProbe {
    #[must_use]
    pub fn new(config: DbConfig) -> Self {
        Self { config }
    }

    fn connect_config(&self) -> tokio_postgres::Config {
        let mut pg = tokio_postgres::Config::new();
        pg.host(&self.config.host)
            .dbname(&self.config.name)
            .user(&self.config.user)
            .password(self.config.password.expose_secret())
            .port(self.config.port)
            .connect_timeout(self.config.connect_timeout());
        pg
    }

    async fn query_version(&self) -> Result<String> {
        let (client, connection) = self.connect_config().connect(NoTls).await?;

        // The connection future performs the actual socket IO.
        let driver = tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::debug!("Database connection closed with error: {}", e);
            }
        });

        let row = client.query_one(VERSION_QUERY, &[]).await;

        // Dropping the client terminates the session; wait until the socket is gone.
        drop(client);
        if let Err(e) = driver.await {
            tracing::warn!("Database connection task failed: {}", e);
        }

        let version: String = row?.try_get(0)?;
        Ok(version)
    }
}

#[async_trait]
impl VersionProbe for PostgresProbe {
    async fn server_version(&self) -> Result<String> {
        let timeout = self.config.connect_timeout();
        tracing::debug!(
            "Probing database {} at {}:{}",
            self.config.name,
            self.config.host,
            self.config.port
        );

        match tokio::time::timeout(timeout, self.query_version()).await {
            Ok(result) => result,
            Err(_) => Err(AppError::Database(format!(
                "timed out after {}s connecting to {}:{}",
                timeout.as_secs(),
                self.config.host,
                self.config.port
            ))),
        }
    }
}
