//! Remote API surface
//!
//! The lifecycle controller, plugin catalog and settings refresher only talk
//! to the server through [`BackendApi`]. [`HttpBackend`] is the production
//! implementation.

mod http;

pub use http::HttpBackend;

use crate::error::Result;
use crate::models::{
    CreatedDataSource, DataSourceRecord, GlobalSettings, NewDataSource, PluginMeta,
};
use async_trait::async_trait;

/// Remote operations consumed by this crate
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// `GET /api/datasources`
    async fn list_data_sources(&self) -> Result<Vec<DataSourceRecord>>;

    /// `GET /api/datasources/{id}`, 404 maps to `NotFound`
    async fn get_data_source(&self, id: i64) -> Result<DataSourceRecord>;

    /// `POST /api/datasources`
    async fn create_data_source(&self, data_source: &NewDataSource) -> Result<CreatedDataSource>;

    /// `PUT /api/datasources/{id}`
    async fn update_data_source(&self, data_source: &DataSourceRecord) -> Result<()>;

    /// `DELETE /api/datasources/{id}`
    async fn delete_data_source(&self, id: i64) -> Result<()>;

    /// `GET /api/plugins?enabled=1&type=datasource`
    async fn list_plugins(&self) -> Result<Vec<PluginMeta>>;

    /// `GET /api/plugins/{id}/settings`
    async fn plugin_settings(&self, plugin_id: &str) -> Result<PluginMeta>;

    /// `GET /api/frontend/settings`
    async fn frontend_settings(&self) -> Result<GlobalSettings>;
}
