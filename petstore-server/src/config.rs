//! Database configuration
//!
//! Environment variables:
//!   POSTGRES_HOST       # default: localhost
//!   POSTGRES_PORT       # default: 5432
//!   POSTGRES_USER       # default: postgres
//!   POSTGRES_PASSWORD   # default: empty
//!   POSTGRES_DATABASE   # default: postgres

use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

/// Maximum connections held by the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Idle connections are closed after this long.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_PORT: u16 = 5432;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    InvalidVar { var: &'static str, value: String },
}

/// Connection settings for the pet store
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub idle_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_PORT,
            user: "postgres".to_string(),
            password: String::new(),
            name: "postgres".to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
        }
    }
}

impl DatabaseConfig {
    /// Read settings from `POSTGRES_*` variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("POSTGRES_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar {
                    var: "POSTGRES_PORT",
                    value,
                })?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("POSTGRES_HOST").unwrap_or(defaults.host),
            port,
            user: lookup("POSTGRES_USER").unwrap_or(defaults.user),
            password: lookup("POSTGRES_PASSWORD").unwrap_or(defaults.password),
            name: lookup("POSTGRES_DATABASE").unwrap_or(defaults.name),
            ..defaults
        })
    }

    pub(crate) fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

// Password stays out of logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .field("idle_timeout", &self.idle_timeout)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(
        vars: &[(&'static str, &str)],
    ) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, DatabaseConfig::default());
        assert_eq!(config.port, 5432);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.idle_timeout, Duration::from_secs(30));
    }

    #[test]
    fn reads_env_overrides() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[
            ("POSTGRES_HOST", "db.internal"),
            ("POSTGRES_PORT", "6543"),
            ("POSTGRES_USER", "pets"),
            ("POSTGRES_PASSWORD", "secret"),
            ("POSTGRES_DATABASE", "petstore"),
        ]))
        .unwrap();

        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 6543);
        assert_eq!(config.user, "pets");
        assert_eq!(config.password, "secret");
        assert_eq!(config.name, "petstore");
    }

    #[test]
    fn rejects_bad_port() {
        let err = DatabaseConfig::from_lookup(lookup_from(&[("POSTGRES_PORT", "five")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { var: "POSTGRES_PORT", .. }));
    }

    #[test]
    fn debug_hides_password() {
        let config = DatabaseConfig {
            password: "hunter2".into(),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
