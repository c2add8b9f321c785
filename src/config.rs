//! Process configuration
//!
//! Every binary resolves its settings in three layers:
//!
//! 1. Built-in defaults (per-service default port, fixed downstream URLs)
//! 2. Optional YAML file at `config/{APP_ENV}.yaml`
//! 3. Environment variables (`PORT`, `HOST`, `USER_SERVICE_URL`, ...)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_USER_SERVICE_URL: &str = "http://user-service:3001";
pub const DEFAULT_ORDER_SERVICE_URL: &str = "http://order-service:3002";

pub const GATEWAY_PORT: u16 = 3000;
pub const USER_SERVICE_PORT: u16 = 3001;
pub const ORDER_SERVICE_PORT: u16 = 3002;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub log: LogConfig,
    pub server: ServerConfig,
    pub gateway: GatewayConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub log_level: String,
    /// File logging is off unless a directory is given
    pub log_dir: Option<String>,
    pub log_file: String,
    pub use_json: bool,
    /// `never`, `hourly` or `daily`
    pub rotation: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
            log_file: "service.log".to_string(),
            use_json: false,
            rotation: "never".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: GATEWAY_PORT,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Downstream endpoints and deadlines used by the gateway
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GatewayConfig {
    pub user_service_url: String,
    pub order_service_url: String,
    /// Whole-request deadline for each downstream call
    pub request_timeout_ms: u64,
    pub connect_timeout_ms: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            user_service_url: DEFAULT_USER_SERVICE_URL.to_string(),
            order_service_url: DEFAULT_ORDER_SERVICE_URL.to_string(),
            request_timeout_ms: 5000,
            connect_timeout_ms: 2000,
        }
    }
}

impl AppConfig {
    /// Defaults for a service listening on `port` unless told otherwise.
    pub fn with_default_port(port: u16) -> Self {
        Self {
            server: ServerConfig {
                port,
                ..ServerConfig::default()
            },
            ..Self::default()
        }
    }

    /// Full resolution against the real process environment.
    pub fn load(default_port: u16) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());
        let path = format!("config/{}.yaml", env);

        let config = if Path::new(&path).exists() {
            Self::from_file(&path, default_port)?
        } else {
            Self::with_default_port(default_port)
        };

        config.apply_env(|key| std::env::var(key).ok())
    }

    /// Parse a YAML file layered over the per-service defaults.
    pub fn from_file(path: &str, default_port: u16) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml(&content, default_port).map_err(|source| ConfigError::Yaml {
            path: path.to_string(),
            source,
        })
    }

    pub fn from_yaml(content: &str, default_port: u16) -> Result<Self, serde_yaml::Error> {
        // An absent `server.port` keeps the service's own default, not the gateway's.
        let mut value: serde_yaml::Value = serde_yaml::from_str(content)?;
        if value.is_null() {
            value = serde_yaml::Value::Mapping(Default::default());
        }
        let has_port = value
            .get("server")
            .and_then(|s| s.get("port"))
            .is_some();

        let mut config: AppConfig = serde_yaml::from_value(value)?;
        if !has_port {
            config.server.port = default_port;
        }
        Ok(config)
    }

    /// Environment variables win over everything else.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = parse_value("PORT", port)?;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(url) = lookup("USER_SERVICE_URL") {
            self.gateway.user_service_url = url;
        }
        if let Some(url) = lookup("ORDER_SERVICE_URL") {
            self.gateway.order_service_url = url;
        }
        if let Some(ms) = lookup("DOWNSTREAM_TIMEOUT_MS") {
            self.gateway.request_timeout_ms = parse_value("DOWNSTREAM_TIMEOUT_MS", ms)?;
        }
        Ok(self)
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}
