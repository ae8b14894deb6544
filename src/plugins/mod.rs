// Data source plugin support
//
// Plugin metadata lookup, module import, and the categorized plugin catalog
// shown when a new data source is added.

pub mod cache;
pub mod catalog;
pub mod categories;
pub mod loader;

pub use cache::PluginSettingsCache;
pub use catalog::{CatalogState, PluginCatalog};
pub use categories::{Categorizer, DefaultCategorizer};
pub use loader::ModulePluginLoader;

use crate::error::Result;
use crate::models::PluginMeta;
use async_trait::async_trait;

/// An imported plugin module
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPlugin {
    pub meta: PluginMeta,
    /// Module path the plugin was imported from
    pub module_path: String,
}

/// Plugin metadata lookup keyed by plugin id
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PluginMetaCache: Send + Sync {
    async fn get(&self, plugin_id: &str) -> Result<PluginMeta>;
}

/// Imports the executable module of a plugin
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PluginLoader: Send + Sync {
    async fn import(&self, meta: &PluginMeta) -> Result<LoadedPlugin>;
}
