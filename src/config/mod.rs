// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the microservices
//!
//! Resolves database and server settings from environment variables once at
//! process start. The resulting values are read-only for the process lifetime.

use secrecy::SecretString;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[cfg(test)]
mod tests;

/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:80";
    pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;
    pub const DB_HOST: &str = "localhost";
    pub const DB_NAME: &str = "customerdb";
    pub const DB_USER: &str = "app_user";
    pub const DB_PASSWORD: &str = "password";
    pub const DB_PORT: u16 = 5432;
    pub const DB_CONNECT_TIMEOUT_SECS: u64 = 5;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
    pub const MAX_UPLOAD_BYTES: &str = "MAX_UPLOAD_BYTES";
    pub const DB_HOST: &str = "DB_HOST";
    pub const DB_NAME: &str = "DB_NAME";
    pub const DB_USER: &str = "DB_USER";
    pub const DB_PASSWORD: &str = "DB_PASSWORD";
    pub const DB_PORT: &str = "DB_PORT";
    pub const DB_CONNECT_TIMEOUT_SECONDS: &str = "DB_CONNECT_TIMEOUT_SECONDS";
}

/// Connection settings for the database probe
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub name: String,
    pub user: String,
    pub password: SecretString,
    pub port: u16,
    pub connect_timeout_secs: u64,
}

impl DbConfig {
    /// Upper bound for a single probe, never shorter than one second
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs.max(1))
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig {
            host: defaults::DB_HOST.to_string(),
            name: defaults::DB_NAME.to_string(),
            user: defaults::DB_USER.to_string(),
            password: SecretString::from(defaults::DB_PASSWORD),
            port: defaults::DB_PORT,
            connect_timeout_secs: defaults::DB_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub server_addr: String,
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            server_addr: defaults::SERVER_ADDR.to_string(),
            max_upload_bytes: defaults::MAX_UPLOAD_BYTES,
        }
    }
}

/// Application-wide configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub db: DbConfig,
}

impl Config {
    /// Loads configuration from process environment variables
    ///
    /// Binaries load `.env` with `dotenvy` before calling this.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup
    ///
    /// Missing keys fall back to [`defaults`]. Numeric values that fail to
    /// parse are logged and replaced by their default as well.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let string_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let server = ServerConfig {
            server_addr: string_or(env_vars::SERVER_ADDR, defaults::SERVER_ADDR),
            max_upload_bytes: parse_or(
                env_vars::MAX_UPLOAD_BYTES,
                lookup(env_vars::MAX_UPLOAD_BYTES),
                defaults::MAX_UPLOAD_BYTES,
            ),
        };

        let db = DbConfig {
            host: string_or(env_vars::DB_HOST, defaults::DB_HOST),
            name: string_or(env_vars::DB_NAME, defaults::DB_NAME),
            user: string_or(env_vars::DB_USER, defaults::DB_USER),
            password: SecretString::from(string_or(
                env_vars::DB_PASSWORD,
                defaults::DB_PASSWORD,
            )),
            port: parse_or(env_vars::DB_PORT, lookup(env_vars::DB_PORT), defaults::DB_PORT),
            connect_timeout_secs: parse_or(
                env_vars::DB_CONNECT_TIMEOUT_SECONDS,
                lookup(env_vars::DB_CONNECT_TIMEOUT_SECONDS),
                defaults::DB_CONNECT_TIMEOUT_SECS,
            ),
        };

        Config { server, db }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {} value '{}', using default {}", key, value, default);
            default
        }),
        None => default,
    }
}
