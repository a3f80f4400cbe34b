//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: IpAddr,
    pub port: u16,
    /// Directory served under `/assets` (product images, model files).
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `SHOWROOM_ADDR`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `SHOWROOM_ASSETS_DIR`: default `assets/` next to this crate
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but does not
    /// parse. Unset variables fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env_parse("SHOWROOM_ADDR", DEFAULT_ADDR)?;
        let port = env_parse("PORT", &DEFAULT_PORT.to_string())?;
        let assets_dir = std::env::var("SHOWROOM_ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_assets_dir());
        Ok(Self { addr, port, assets_dir })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.addr, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            assets_dir: default_assets_dir(),
        }
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}

fn env_parse<T>(var: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    let value = std::env::var(var).unwrap_or_else(|_| default.to_owned());
    value.trim().parse::<T>().map_err(|_| ConfigError::Invalid { var, value })
}
