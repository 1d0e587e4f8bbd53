//! Database endpoint configuration.

use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

/// Connection parameters for the target database.
///
/// Populated from `SEED_DB_*` environment variables; any variable left
/// unset falls back to the local development endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_password")]
    pub password: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_database() -> String {
    "quickbooks".to_string()
}

fn default_user() -> String {
    "root".to_string()
}

fn default_password() -> String {
    "root".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database: default_database(),
            user: default_user(),
            password: default_password(),
        }
    }
}

impl DatabaseConfig {
    /// Reads configuration from `SEED_DB_*` environment variables.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("SEED_DB_").from_env()
    }

    /// Connect options for the configured endpoint.
    ///
    /// Built field by field rather than as a URL string, so credentials
    /// containing reserved characters bind as-is.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = DatabaseConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5432);
        assert_eq!(config.database, "quickbooks");
        assert_eq!(config.user, "root");
        assert_eq!(config.password, "root");
    }

    #[test]
    fn test_env_overrides() {
        let vars = vec![
            ("SEED_DB_HOST".to_string(), "db.internal".to_string()),
            ("SEED_DB_DATABASE".to_string(), "books_staging".to_string()),
        ];
        let config: DatabaseConfig = envy::prefixed("SEED_DB_").from_iter(vars).unwrap();

        assert_eq!(config.host, "db.internal");
        assert_eq!(config.database, "books_staging");

        // Unset variables keep their defaults
        assert_eq!(config.port, 5432);
        assert_eq!(config.user, "root");
    }
}
