//! Configuration system for dsadmin
//!
//! Layered configuration (defaults, config file, environment) describing how
//! to reach the remote API and how to log.

mod defaults;
pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{AuthConfig, AuthType, Config, LoggerConfig, ServerConfig};

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &schema::Config, key: &str) -> anyhow::Result<String> {
    match key {
        "server.url" => Ok(config.server.url.clone()),
        "server.timeout" => Ok(config.server.timeout.clone()),
        "server.orgId" => Ok(config
            .server
            .org_id
            .map(|id| id.to_string())
            .unwrap_or_default()),
        "server.auth.type" => serde_yaml::to_string(&config.server.auth.auth_type)
            .map(|s| s.trim().to_string())
            .map_err(|e| anyhow::anyhow!("Failed to serialize server.auth.type: {}", e)),
        "server.auth.tokenEnv" => Ok(config.server.auth.token_env.clone().unwrap_or_default()),
        "server.auth.username" => Ok(config.server.auth.username.clone().unwrap_or_default()),
        "server.auth.passwordEnv" => Ok(config.server.auth.password_env.clone().unwrap_or_default()),
        "server.auth.header" => Ok(config.server.auth.header.clone().unwrap_or_default()),
        "logger.level" => Ok(config.logger.level.clone()),
        "logger.file" => Ok(config.logger.file.clone().unwrap_or_default()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key (dot notation)
///
/// An empty value clears optional keys.
pub fn set_config_value(config: &mut schema::Config, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;

    fn optional(value: &str) -> Option<String> {
        (!value.is_empty()).then(|| value.to_string())
    }

    match key {
        "server.url" => {
            url::Url::parse(value).context("server.url must be an absolute URL")?;
            config.server.url = value.to_string();
        }
        "server.timeout" => {
            schema::parse_duration(value)
                .context("server.timeout must look like '30s', '500ms', '1m' or '2h'")?;
            config.server.timeout = value.to_string();
        }
        "server.orgId" => {
            config.server.org_id = if value.is_empty() {
                None
            } else {
                Some(value.parse().context("server.orgId must be a number")?)
            };
        }
        "server.auth.type" => {
            config.server.auth.auth_type = serde_yaml::from_str(value)
                .context("server.auth.type must be one of: none, bearer, basic, api_key")?;
        }
        "server.auth.tokenEnv" => config.server.auth.token_env = optional(value),
        "server.auth.username" => config.server.auth.username = optional(value),
        "server.auth.passwordEnv" => config.server.auth.password_env = optional(value),
        "server.auth.header" => config.server.auth.header = optional(value),
        "logger.level" => {
            config.logger.level = value.to_string();
        }
        "logger.file" => config.logger.file = optional(value),
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    Ok(())
}
