//! Database connection pool management
//!
//! One `PoolProvider` owns the process-wide `PgPool`. The pool is built on
//! first use, together with the schema bootstrap, and every later call gets
//! the same handle back.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use super::schema;
use crate::config::DatabaseConfig;

/// Lazily initialized, shared connection pool.
pub struct PoolProvider {
    config: DatabaseConfig,
    pool: OnceCell<PgPool>,
}

impl PoolProvider {
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            pool: OnceCell::new(),
        }
    }

    /// Get the pool, connecting and ensuring the schema on the first call.
    ///
    /// Concurrent first callers wait on the same initialization. If it fails
    /// the error is returned and the next call tries again.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let provider = PoolProvider::new(DatabaseConfig::from_env()?);
    /// let pool = provider.get().await?;
    /// ```
    pub async fn get(&self) -> Result<&PgPool, sqlx::Error> {
        self.pool.get_or_try_init(|| self.connect()).await
    }

    /// Whether the pool has been created yet.
    pub fn is_initialized(&self) -> bool {
        self.pool.initialized()
    }

    /// Close every connection in the pool.
    ///
    /// No-op if the pool was never created.
    pub async fn close(&self) {
        if let Some(pool) = self.pool.get() {
            tracing::info!("Closing database pool");
            pool.close().await;
        }
    }

    async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        tracing::info!(config = ?self.config, "Creating database pool");

        let pool = PgPoolOptions::new()
            .max_connections(self.config.max_connections)
            .idle_timeout(self.config.idle_timeout)
            .connect_with(self.config.connect_options())
            .await?;

        schema::ensure(&pool).await?;
        Ok(pool)
    }
}
