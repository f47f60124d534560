//! Process configuration
//!
//! Read once at startup from environment variables:
//!
//! - `PLAYSTORE_API_BIND` - listen address (default `0.0.0.0:3000`)
//! - `PLAYSTORE_API_UPSTREAM` - base URL of the catalog scraper service (required)
//! - `PLAYSTORE_API_PREFIX` - mount prefix for all routes (default `/api`)

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_BIND: &str = "0.0.0.0:3000";

/// Default mount prefix for the gateway's route namespace.
pub const DEFAULT_MOUNT_PREFIX: &str = "/api";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: SocketAddr,
    pub upstream_url: String,
    pub mount_prefix: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PLAYSTORE_API_BIND is not a valid socket address: {0}")]
    InvalidBind(#[from] std::net::AddrParseError),
    #[error("PLAYSTORE_API_UPSTREAM must be set to the catalog service base URL")]
    MissingUpstream,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind = env::var("PLAYSTORE_API_BIND")
            .unwrap_or_else(|_| DEFAULT_BIND.to_string())
            .parse()?;

        let upstream_url =
            env::var("PLAYSTORE_API_UPSTREAM").map_err(|_| ConfigError::MissingUpstream)?;

        let mount_prefix =
            env::var("PLAYSTORE_API_PREFIX").unwrap_or_else(|_| DEFAULT_MOUNT_PREFIX.to_string());

        Ok(Self {
            bind,
            upstream_url,
            mount_prefix,
        })
    }
}
