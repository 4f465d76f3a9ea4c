use anyhow::{Context, Result};
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use tracing::debug;

use crate::config::DatabaseConfig;
use crate::db::DatabasePool;

/// A throwaway Postgres instance with migrations applied.
///
/// The container is stopped when the environment is dropped, so keep it alive
/// for as long as the pool is in use.
pub struct TestEnvironment {
    pub db_pool: DatabasePool,
    pub database_url: String,
    _postgres: ContainerAsync<Postgres>,
}

impl TestEnvironment {
    pub async fn new() -> Result<Self> {
        let postgres = Postgres::default()
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let host = postgres.get_host().await?;
        let port = postgres.get_host_port_ipv4(5432).await?;
        let database_url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);
        debug!("Test database at {}", database_url);

        let db_pool = DatabasePool::new(&database_url)
            .await
            .context("Failed to connect to test database")?;
        db_pool
            .run_migrations()
            .await
            .context("Failed to migrate test database")?;

        Ok(Self {
            db_pool,
            database_url,
            _postgres: postgres,
        })
    }

    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(self.database_url.clone())
    }
}
