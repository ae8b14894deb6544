//! Configuration schema definitions
//!
//! Defines the structure of configuration files using serde for serialization.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Remote API connection settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerConfig,
}

/// Remote API connection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// Base URL of the server (e.g. "http://localhost:3000")
    #[serde(default = "default_url")]
    pub url: String,

    /// Request timeout (e.g. "30s", "500ms", "1m")
    #[serde(default = "default_timeout")]
    pub timeout: String,

    /// Organization to act in, sent as `X-Grafana-Org-Id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<i64>,

    /// Credentials attached to every request
    #[serde(default)]
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Parsed request timeout
    pub fn timeout(&self) -> Result<Duration> {
        parse_duration(&self.timeout)
            .with_context(|| format!("Invalid server.timeout: {}", self.timeout))
    }
}

/// Authentication type
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuthType {
    #[default]
    None,
    Bearer,
    Basic,
    ApiKey,
}

/// Authentication configuration
///
/// Secrets are never stored in the file; the config names the environment
/// variables holding them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    #[serde(rename = "type", default)]
    pub auth_type: AuthType,

    /// Env var holding the bearer token or API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_env: Option<String>,

    /// Username for basic auth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Env var holding the basic auth password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_env: Option<String>,

    /// Header name for api_key auth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}

/// Logger configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoggerConfig {
    /// Default filter directive when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Write logs to this file instead of stderr
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

// Default value functions
fn default_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout() -> String {
    "30s".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout: default_timeout(),
            org_id: None,
            auth: AuthConfig::default(),
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Parse duration string (e.g., "30s", "1m", "500ms")
pub fn parse_duration(s: &str) -> Result<Duration> {
    if let Some(ms) = s.strip_suffix("ms") {
        let ms: u64 = ms.parse().context("Invalid milliseconds in duration")?;
        Ok(Duration::from_millis(ms))
    } else if let Some(secs) = s.strip_suffix('s') {
        let secs: u64 = secs.parse().context("Invalid seconds in duration")?;
        Ok(Duration::from_secs(secs))
    } else if let Some(mins) = s.strip_suffix('m') {
        let mins: u64 = mins.parse().context("Invalid minutes in duration")?;
        Ok(Duration::from_secs(mins * 60))
    } else if let Some(hours) = s.strip_suffix('h') {
        let hours: u64 = hours.parse().context("Invalid hours in duration")?;
        Ok(Duration::from_secs(hours * 3600))
    } else {
        anyhow::bail!("Invalid duration format: {}", s)
    }
}
