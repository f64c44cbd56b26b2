use std::str::FromStr;

use crate::error::{ComboError, Result};

pub const HOST_VAR: &str = "DAILY_COMBOS_HOST";
pub const PORT_VAR: &str = "DAILY_COMBOS_PORT";
pub const SEED_VAR: &str = "DAILY_COMBOS_SEED";
pub const MAX_UPLOAD_VAR: &str = "DAILY_COMBOS_MAX_UPLOAD_BYTES";
pub const LOG_VAR: &str = "DAILY_COMBOS_LOG";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Service settings. Loaded from the environment, then overridden by CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub seed: Option<u64>,
    pub max_upload_bytes: usize,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ComboError::Config(format!("{name}={value:?} is not a valid value")))
}

impl ServerConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR) {
            config.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            config.port = parse_var(PORT_VAR, &port)?;
        }
        if let Some(seed) = lookup(SEED_VAR) {
            config.seed = Some(parse_var(SEED_VAR, &seed)?);
        }
        if let Some(limit) = lookup(MAX_UPLOAD_VAR) {
            config.max_upload_bytes = parse_var(MAX_UPLOAD_VAR, &limit)?;
        }
        if let Some(level) = lookup(LOG_VAR) {
            config.log_level = level;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// One-line description for startup logs.
    pub fn summary(&self) -> String {
        format!(
            "bind={} seed={} max_upload_bytes={} log={}",
            self.bind_address(),
            self.seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "entropy".to_string()),
            self.max_upload_bytes,
            self.log_level
        )
    }
}
