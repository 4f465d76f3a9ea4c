use anyhow::{Context, Result};
use shared::config::parse_env_or;
use shared::DatabaseConfig;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: parse_env_or("EMPLOYEE_API_HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?,
            port: parse_env_or("EMPLOYEE_API_PORT", DEFAULT_PORT)?,
            database: DatabaseConfig::from_env().context("Invalid database configuration")?,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
