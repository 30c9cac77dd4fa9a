//! Runtime configuration read from the environment.
//!
//! | Variable                   | Default           |
//! |----------------------------|-------------------|
//! | `HOST`                     | `127.0.0.1`       |
//! | `PORT`                     | `3000`            |
//! | `DATABASE_URL`             | `sqlite::memory:` |
//! | `DATABASE_MAX_CONNECTIONS` | `5`               |
//!
//! Values that fail to parse fall back to the default.

use std::env;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    pub fn in_memory() -> Self {
        Self::with_url(DEFAULT_DATABASE_URL)
    }

    /// True for URLs whose database disappears with its connection.
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("PORT")
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .and_then(|value| value.parse().ok())
            .filter(|count| *count > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        Self {
            server: ServerConfig::new(host, port),
            database: DatabaseConfig {
                url,
                max_connections,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.server.socket_addr(), "127.0.0.1:3000");
        assert!(config.database.is_in_memory());
    }

    #[test]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("DATABASE_URL", "sqlite://todos.db"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
        ]));
        assert_eq!(config.server, ServerConfig::new("0.0.0.0", 8080));
        assert_eq!(config.database.url, "sqlite://todos.db");
        assert_eq!(config.database.max_connections, 12);
        assert!(!config.database.is_in_memory());
    }

    #[test]
    fn bad_numbers_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "not-a-port"),
            ("DATABASE_MAX_CONNECTIONS", "0"),
        ]));
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn shared_cache_memory_url_is_in_memory() {
        let config = DatabaseConfig::with_url("sqlite:file:todos?mode=memory&cache=shared");
        assert!(config.is_in_memory());
    }
}
