use crate::error::{ConfigErrorKind, InfraError, InfraResult};
use crate::repo::DEFAULT_FIRST_ID;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_ACCOUNT_ID_START: u64 = DEFAULT_FIRST_ID.0;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub http_addr: String,          // e.g. "0.0.0.0:8080"
    pub account_id_start: u64,      // first id handed out by the account store
    pub log_filter: String,         // used when RUST_LOG is not set
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
            account_id_start: DEFAULT_ACCOUNT_ID_START,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> InfraResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| InfraError::Config {
            path: path.to_path_buf(),
            source: ConfigErrorKind::Read(e),
        })?;
        Self::parse(&data).map_err(|e| InfraError::Config {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn parse(data: &str) -> Result<Self, ConfigErrorKind> {
        toml::from_str(data).map_err(ConfigErrorKind::Parse)
    }

    pub fn from_env() -> InfraResult<Self> {
        let _ = dotenvy::from_filename(".env");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from a variable lookup, falling back to defaults for
    /// anything unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> InfraResult<Self> {
        let account_id_start = match lookup("ACCOUNT_ID_START") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                InfraError::Env(ConfigErrorKind::InvalidEnv("ACCOUNT_ID_START".into(), format!("{raw:?}: {e}")))
            })?,
            None => DEFAULT_ACCOUNT_ID_START,
        };

        let cfg = Self {
            http_addr: lookup("HTTP_ADDR").unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string()),
            account_id_start,
            log_filter: lookup("LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        };

        Ok(cfg)
    }

    pub fn socket_addr(&self) -> InfraResult<SocketAddr> {
        self.http_addr.parse().map_err(|e| InfraError::Addr {
            addr: self.http_addr.clone(),
            source: e,
        })
    }
}
