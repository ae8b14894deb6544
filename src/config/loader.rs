//! Configuration loading and merging logic
//!
//! Handles loading configuration from the config file and the environment
//! and merging them according to precedence rules.

use super::{defaults, paths, schema::Config};
use anyhow::{Context, Result};
use std::path::Path;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Root config file
    /// 3. Built-in defaults
    pub fn load() -> Result<Config> {
        Self::load_from(&paths::root_config_path())
    }

    /// Same as [`ConfigLoader::load`] with an explicit config file
    pub fn load_from(path: &Path) -> Result<Config> {
        let mut config = Self::load_defaults();

        if path.exists() {
            config = Self::load_file(path)?;
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
        }

        Ok(Self::apply_env_overrides(config))
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration by loading and checking for errors
    ///
    /// Fails on invalid YAML, invalid value types, an unparsable server URL
    /// or timeout. Only the file layer is checked; env overrides are not
    /// applied.
    pub fn validate(path: &Path) -> Result<()> {
        let config = if path.exists() {
            Self::load_file(path)?
        } else {
            Self::load_defaults()
        };

        url::Url::parse(&config.server.url)
            .with_context(|| format!("server.url is not a valid URL: {}", config.server.url))?;
        config.server.timeout()?;

        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        defaults::default_config()
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Config) -> Config {
        // DSADMIN_URL override
        if let Ok(url) = std::env::var("DSADMIN_URL") {
            config.server.url = url;
        }

        // DSADMIN_TIMEOUT override
        if let Ok(timeout) = std::env::var("DSADMIN_TIMEOUT") {
            config.server.timeout = timeout;
        }

        // DSADMIN_ORG_ID override
        if let Ok(org_id) = std::env::var("DSADMIN_ORG_ID") {
            match org_id.parse::<i64>() {
                Ok(val) => config.server.org_id = Some(val),
                Err(_) => tracing::warn!("Ignoring non-numeric DSADMIN_ORG_ID: {}", org_id),
            }
        }

        config
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save root configuration
    pub fn save_root(config: &Config) -> Result<()> {
        Self::save(config, &paths::root_config_path())
    }
}
