//! Store configuration loaded from the process environment.

use crate::store::postgres::StorePgPool;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use std::time::Duration;
use thiserror::Error;

/// Variable holding the `PostgreSQL` connection URL.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Variable holding the maximum number of pooled connections.
pub const POOL_SIZE_VAR: &str = "TODOS_DB_POOL_SIZE";
/// Variable holding the connection checkout timeout in seconds.
pub const TIMEOUT_SECS_VAR: &str = "TODOS_DB_TIMEOUT_SECS";

const DEFAULT_POOL_SIZE: u32 = 10;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors raised while loading configuration or building the pool.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing required configuration variable {0}")]
    Missing(&'static str),

    /// A variable holds a value that does not parse.
    #[error("invalid value {value:?} for {name}: {reason}")]
    Invalid {
        /// Variable name.
        name: &'static str,
        /// Offending value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The connection pool could not be built.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

/// Connection settings for the `PostgreSQL` store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// Maximum number of pooled connections.
    pub max_pool_size: u32,
    /// How long a pool checkout may wait for a connection.
    pub connection_timeout: Duration,
}

impl StoreConfig {
    /// Creates a configuration with default pool settings.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_pool_size: DEFAULT_POOL_SIZE,
            connection_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when `DATABASE_URL` is unset, or
    /// [`ConfigError::Invalid`] when a pool setting does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through a variable lookup function.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when the database URL is absent, or
    /// [`ConfigError::Invalid`] when a pool setting does not parse or the
    /// pool size is zero.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL_VAR))?;

        let max_pool_size = match lookup(POOL_SIZE_VAR) {
            Some(raw) => parse_pool_size(&raw)?,
            None => DEFAULT_POOL_SIZE,
        };
        let timeout_secs = match lookup(TIMEOUT_SECS_VAR) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|err| ConfigError::Invalid {
                name: TIMEOUT_SECS_VAR,
                value: raw.clone(),
                reason: err.to_string(),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url,
            max_pool_size,
            connection_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Builds the Diesel r2d2 pool described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pool`] when the pool cannot open its initial
    /// connections.
    pub fn build_pool(&self) -> Result<StorePgPool, ConfigError> {
        let manager = ConnectionManager::<PgConnection>::new(&self.database_url);
        Ok(Pool::builder()
            .max_size(self.max_pool_size)
            .connection_timeout(self.connection_timeout)
            .build(manager)?)
    }
}

fn parse_pool_size(raw: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        name: POOL_SIZE_VAR,
        value: raw.to_owned(),
        reason,
    };
    let size = raw
        .trim()
        .parse::<u32>()
        .map_err(|err| invalid(err.to_string()))?;
    if size == 0 {
        return Err(invalid("pool size must be greater than zero".to_owned()));
    }
    Ok(size)
}
