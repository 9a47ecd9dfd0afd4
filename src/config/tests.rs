// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Unit tests for configuration module

#[cfg(test)]
mod test {
    use super::super::*;
    use secrecy::{ExposeSecret, SecretString};
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.server_addr, "0.0.0.0:80");
        assert_eq!(config.server.max_upload_bytes, 16 * 1024 * 1024);
        assert_eq!(config.db.host, "localhost");
        assert_eq!(config.db.name, "customerdb");
        assert_eq!(config.db.user, "app_user");
        assert_eq!(config.db.password.expose_secret(), "password");
        assert_eq!(config.db.port, 5432);
        assert_eq!(config.db.connect_timeout_secs, 5);
    }

    #[test]
    fn test_empty_lookup_matches_defaults() {
        let config = Config::from_lookup(|_| None);
        let db = DbConfig::default();
        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.db.host, db.host);
        assert_eq!(config.db.name, db.name);
        assert_eq!(config.db.user, db.user);
        assert_eq!(config.db.password.expose_secret(), db.password.expose_secret());
        assert_eq!(config.db.port, db.port);
        assert_eq!(config.db.connect_timeout_secs, db.connect_timeout_secs);
    }

    #[test]
    fn test_lookup_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DB_HOST", "db.internal"),
            ("DB_NAME", "orders"),
            ("DB_USER", "reader"),
            ("DB_PASSWORD", "s3cret"),
            ("DB_PORT", "6543"),
            ("DB_CONNECT_TIMEOUT_SECONDS", "2"),
            ("SERVER_ADDR", "127.0.0.1:8080"),
            ("MAX_UPLOAD_BYTES", "1024"),
        ]));

        assert_eq!(config.db.host, "db.internal");
        assert_eq!(config.db.name, "orders");
        assert_eq!(config.db.user, "reader");
        assert_eq!(config.db.password.expose_secret(), "s3cret");
        assert_eq!(config.db.port, 6543);
        assert_eq!(config.db.connect_timeout_secs, 2);
        assert_eq!(config.server.server_addr, "127.0.0.1:8080");
        assert_eq!(config.server.max_upload_bytes, 1024);
    }

    #[test]
    fn test_invalid_numbers_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("DB_PORT", "not-a-port"),
            ("DB_CONNECT_TIMEOUT_SECONDS", "-1"),
            ("MAX_UPLOAD_BYTES", "lots"),
        ]));

        assert_eq!(config.db.port, 5432);
        assert_eq!(config.db.connect_timeout_secs, 5);
        assert_eq!(config.server.max_upload_bytes, 16 * 1024 * 1024);
    }

    #[test]
    fn test_port_is_trimmed() {
        let config = Config::from_lookup(lookup_from(&[("DB_PORT", " 5433 ")]));
        assert_eq!(config.db.port, 5433);
    }

    #[test]
    fn test_debug_hides_password() {
        let db = DbConfig {
            password: SecretString::from("hunter2"),
            ..DbConfig::default()
        };
        let debug_str = format!("{:?}", db);
        assert!(!debug_str.contains("hunter2"));
        assert!(debug_str.contains("customerdb"));
    }

    #[test]
    fn test_connect_timeout_duration() {
        let db = DbConfig {
            connect_timeout_secs: 3,
            ..DbConfig::default()
        };
        assert_eq!(db.connect_timeout(), std::time::Duration::from_secs(3));
    }

    #[test]
    fn test_zero_connect_timeout_is_clamped() {
        let db = DbConfig {
            connect_timeout_secs: 0,
            ..DbConfig::default()
        };
        assert_eq!(db.connect_timeout(), std::time::Duration::from_secs(1));
    }
}
