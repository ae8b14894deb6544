//! dsadmin library
//!
//! Client-side lifecycle management for data source configuration records:
//! the controller, its store, the plugin catalog and the settings refresh
//! that keeps the rest of the process in step. The `dsadmin` binary is a thin
//! CLI over this library.

pub mod api;
pub mod cli;
pub mod config;
pub mod datasources;
pub mod error;
pub mod models;
pub mod plugins;
pub mod services;

// Re-export commonly used types for convenience
pub use api::{BackendApi, HttpBackend};
pub use datasources::{
    Collaborators, DataSourceController, DataSourceStore, find_new_name, name_exists,
};
pub use error::{DataSourceError, Result};
pub use plugins::{PluginCatalog, PluginSettingsCache};
pub use services::{
    DataSourceResolutionService, FrontendSettingsRefresher, LocationState, SettingsHandle,
};
