use std::net::SocketAddr;
use std::time::Duration;

use regex::Regex;
use sqlx::mysql::MySqlConnectOptions;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Which `PriceStore` implementation backs the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MySql,
    Demo,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub database: DatabaseConfig,
    pub table: String,
    pub backend: StoreBackend,
    pub catalog_ttl: Duration,
    pub bind_addr: SocketAddr,
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, applying local-development
    /// defaults for every missing key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = var("DB_PORT", "3306")
            .parse::<u16>()
            .map_err(|e| ConfigError::Invalid { key: "DB_PORT", message: e.to_string() })?;

        let backend = match var("PRICE_STORE", "mysql").to_lowercase().as_str() {
            "mysql" => StoreBackend::MySql,
            "demo" => StoreBackend::Demo,
            other => {
                return Err(ConfigError::Invalid {
                    key: "PRICE_STORE",
                    message: format!("'{}' must be 'mysql' or 'demo'", other),
                })
            }
        };

        let ttl_secs = var("CATALOG_TTL_SECS", "3600")
            .parse::<u64>()
            .map_err(|e| ConfigError::Invalid { key: "CATALOG_TTL_SECS", message: e.to_string() })?;

        let bind_addr = var("BIND_ADDR", "0.0.0.0:3000")
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid { key: "BIND_ADDR", message: e.to_string() })?;

        let config = Self {
            database: DatabaseConfig {
                host: var("DB_HOST", "localhost"),
                port,
                user: var("DB_USER", "root"),
                password: var("DB_PASSWORD", ""),
                name: var("DB_NAME", "sunflower_trade"),
            },
            table: var("PRICE_TABLE", "item_prices"),
            backend,
            catalog_ttl: Duration::from_secs(ttl_secs),
            bind_addr,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // The table name is spliced into the statements, everything else is bound.
        let identifier = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,63}$")
            .map_err(|e| ConfigError::Invalid { key: "PRICE_TABLE", message: e.to_string() })?;
        if !identifier.is_match(&self.table) {
            return Err(ConfigError::Invalid {
                key: "PRICE_TABLE",
                message: format!("'{}' is not a plain SQL identifier", self.table),
            });
        }
        if self.catalog_ttl.is_zero() {
            return Err(ConfigError::Invalid {
                key: "CATALOG_TTL_SECS",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<DashboardConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DashboardConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_target_local_database() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.user, "root");
        assert_eq!(config.database.password, "");
        assert_eq!(config.database.name, "sunflower_trade");
        assert_eq!(config.table, "item_prices");
        assert_eq!(config.backend, StoreBackend::MySql);
        assert_eq!(config.catalog_ttl, Duration::from_secs(3600));
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let config = config_from(&[
            ("DB_HOST", "db.internal"),
            ("DB_PASSWORD", "hunter2"),
            ("PRICE_STORE", "Demo"),
            ("CATALOG_TTL_SECS", "60"),
        ])
        .unwrap();

        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.password, "hunter2");
        assert_eq!(config.backend, StoreBackend::Demo);
        assert_eq!(config.catalog_ttl, Duration::from_secs(60));
    }

    #[test]
    fn test_rejects_table_name_that_is_not_an_identifier() {
        let result = config_from(&[("PRICE_TABLE", "item_prices; DROP TABLE x")]);
        assert!(matches!(result, Err(ConfigError::Invalid { key: "PRICE_TABLE", .. })));
    }

    #[test]
    fn test_rejects_unknown_backend_and_bad_numbers() {
        assert!(config_from(&[("PRICE_STORE", "postgres")]).is_err());
        assert!(config_from(&[("DB_PORT", "not-a-port")]).is_err());
        assert!(config_from(&[("CATALOG_TTL_SECS", "0")]).is_err());
    }
}
