//! HTTP implementation of the remote API

use super::BackendApi;
use crate::config::{AuthConfig, AuthType, ServerConfig};
use crate::error::{DataSourceError, Result};
use crate::models::{
    CreatedDataSource, DataSourceRecord, GlobalSettings, NewDataSource, PluginMeta,
};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

/// Credentials resolved from the environment at construction time
enum Credentials {
    None,
    Bearer(String),
    Basic { username: String, password: String },
    Header { name: String, value: String },
}

/// HTTP backend talking JSON to the server
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
    org_id: Option<i64>,
}

impl HttpBackend {
    /// Create a new HTTP backend from server configuration
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        let mut base_url = Url::parse(&config.url)
            .with_context(|| format!("Invalid server URL: {}", config.url))?;

        // Url::join replaces the last segment unless the path ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout()?)
            .user_agent(concat!("dsadmin/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        let credentials = resolve_credentials(&config.auth)?;

        tracing::debug!("Created HTTP backend for: {}", base_url);

        Ok(Self {
            client,
            base_url,
            credentials,
            org_id: config.org_id,
        })
    }

    /// Base URL all API paths are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(path.trim_start_matches('/'))?;

        let mut req = self.client.request(method, url);

        req = match &self.credentials {
            Credentials::None => req,
            Credentials::Bearer(token) => req.bearer_auth(token),
            Credentials::Basic { username, password } => req.basic_auth(username, Some(password)),
            Credentials::Header { name, value } => req.header(name.as_str(), value.as_str()),
        };

        if let Some(org_id) = self.org_id {
            req = req.header("X-Grafana-Org-Id", org_id.to_string());
        }

        Ok(req)
    }

    /// Send a request and decode the JSON response body
    async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder, path: &str) -> Result<T> {
        let resp = self.send(req, path).await?;
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send a request, mapping non-success statuses to errors
    async fn send(&self, req: RequestBuilder, path: &str) -> Result<Response> {
        tracing::debug!("Requesting: {}", path);

        let resp = req.send().await?;
        let status = resp.status();

        if status == StatusCode::NOT_FOUND {
            return Err(DataSourceError::NotFound(path.to_string()));
        }

        if !status.is_success() {
            let body = match resp.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!("Failed to read error body from {}: {}", path, e);
                    format!("<unreadable body: {e}>")
                }
            };
            tracing::warn!("Request to {} failed with status {}", path, status);
            return Err(DataSourceError::RemoteRequest {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp)
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn list_data_sources(&self) -> Result<Vec<DataSourceRecord>> {
        let path = "/api/datasources";
        self.send_json(self.request(Method::GET, path)?, path).await
    }

    async fn get_data_source(&self, id: i64) -> Result<DataSourceRecord> {
        let path = format!("/api/datasources/{id}");
        self.send_json(self.request(Method::GET, &path)?, &path).await
    }

    async fn create_data_source(&self, data_source: &NewDataSource) -> Result<CreatedDataSource> {
        let path = "/api/datasources";
        let req = self.request(Method::POST, path)?.json(data_source);
        self.send_json(req, path).await
    }

    async fn update_data_source(&self, data_source: &DataSourceRecord) -> Result<()> {
        let path = format!("/api/datasources/{}", data_source.id);
        let req = self.request(Method::PUT, &path)?.json(data_source);
        self.send(req, &path).await?;
        Ok(())
    }

    async fn delete_data_source(&self, id: i64) -> Result<()> {
        let path = format!("/api/datasources/{id}");
        self.send(self.request(Method::DELETE, &path)?, &path).await?;
        Ok(())
    }

    async fn list_plugins(&self) -> Result<Vec<PluginMeta>> {
        let path = "/api/plugins";
        let req = self
            .request(Method::GET, path)?
            .query(&[("enabled", "1"), ("type", "datasource")]);
        self.send_json(req, path).await
    }

    async fn plugin_settings(&self, plugin_id: &str) -> Result<PluginMeta> {
        let path = format!("/api/plugins/{plugin_id}/settings");
        self.send_json(self.request(Method::GET, &path)?, &path).await
    }

    async fn frontend_settings(&self) -> Result<GlobalSettings> {
        let path = "/api/frontend/settings";
        self.send_json(self.request(Method::GET, path)?, path).await
    }
}

/// Resolve configured credentials from environment variables
fn resolve_credentials(auth: &AuthConfig) -> anyhow::Result<Credentials> {
    Ok(match auth.auth_type {
        AuthType::None => Credentials::None,
        AuthType::Bearer => Credentials::Bearer(get_env_var(&auth.token_env, "tokenEnv")?),
        AuthType::Basic => Credentials::Basic {
            username: auth
                .username
                .clone()
                .context("username required for basic auth")?,
            password: get_env_var(&auth.password_env, "passwordEnv")?,
        },
        AuthType::ApiKey => Credentials::Header {
            name: auth
                .header
                .clone()
                .context("header required for api_key auth")?,
            value: get_env_var(&auth.token_env, "tokenEnv")?,
        },
    })
}

/// Get environment variable value
fn get_env_var(env_var: &Option<String>, field_name: &str) -> anyhow::Result<String> {
    let var_name = env_var
        .as_ref()
        .with_context(|| format!("{} required for this auth type", field_name))?;

    std::env::var(var_name).with_context(|| {
        format!(
            "Environment variable {} not set (required for auth)",
            var_name
        )
    })
}
