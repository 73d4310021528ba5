//! Server configuration.
//!
//! Values come from three layers, later ones winning: built-in defaults, an
//! optional TOML file, then command-line flags (each with an environment
//! variable fallback).

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

use observability::TracingConfig;

/// Errors loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address or hostname to bind.
    pub host: String,
    pub port: u16,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Emit JSON log lines.
    pub json_logs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_filter: TracingConfig::default().default_filter,
            json_logs: false,
        }
    }
}

impl ServerConfig {
    /// Load from a TOML file; missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `host:port`, for binding and logging.
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    pub fn tracing(&self) -> TracingConfig {
        TracingConfig {
            default_filter: self.log_filter.clone(),
            json: self.json_logs,
        }
    }
}

/// Command-line arguments of the `phase-api` binary.
#[derive(Debug, Default, Parser)]
#[command(name = "phase-api")]
#[command(about = "Serve interpolated saturated specific volumes over HTTP", long_about = None)]
pub struct ServeArgs {
    /// Path to a TOML config file
    #[arg(short, long, env = "PHASE_API_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "PHASE_API_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PHASE_API_PORT")]
    pub port: Option<u16>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "PHASE_API_LOG")]
    pub log_filter: Option<String>,

    /// Emit JSON log lines
    #[arg(long, env = "PHASE_API_JSON_LOGS")]
    pub json_logs: bool,
}

impl ServeArgs {
    /// Merge defaults, the config file and these arguments.
    pub fn resolve(self) -> Result<ServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };

        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(log_filter) = self.log_filter {
            config.log_filter = log_filter;
        }
        if self.json_logs {
            config.json_logs = true;
        }

        Ok(config)
    }
}
