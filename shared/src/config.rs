use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECONDS: u64 = 3;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
}

impl DatabaseConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout_seconds: DEFAULT_ACQUIRE_TIMEOUT_SECONDS,
        }
    }

    pub fn from_env() -> Result<Self> {
        let database_url = get_env("DATABASE_URL")?;

        Ok(Self {
            database_url,
            max_connections: parse_env_or("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            acquire_timeout_seconds: parse_env_or(
                "DB_ACQUIRE_TIMEOUT_SECONDS",
                DEFAULT_ACQUIRE_TIMEOUT_SECONDS,
            )?,
        })
    }
}

pub fn get_env(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{} environment variable not set", name))
}

/// Parses `name` from the environment, falling back to `default` when unset.
/// A value that is set but unparseable is an error.
pub fn parse_env_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid value, got '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}
