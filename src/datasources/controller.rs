//! Data source lifecycle controller
//!
//! Orchestrates list/load/create/update/delete against the remote API and
//! keeps the store, navigation and global settings in step. Each operation
//! is a single task whose steps run strictly in order; a failing step stops
//! the operation and its error is returned unchanged.

use super::nav_model::{DataSourceNavBuilder, NavModelBuilder, nav_id};
use super::naming::{find_new_name, name_exists};
use super::store::DataSourceStore;
use crate::api::BackendApi;
use crate::error::Result;
use crate::models::{Access, DataSourceRecord, NavigationContext, NewDataSource, PluginMeta};
use crate::plugins::{ModulePluginLoader, PluginLoader, PluginMetaCache, PluginSettingsCache};
use crate::services::{
    DATA_SOURCES_PATH, FrontendSettingsRefresher, NavIndex, Navigator, SettingsHandle, edit_path,
};
use std::sync::Arc;

/// Everything the controller depends on besides the remote API
pub struct Collaborators {
    pub plugin_cache: Arc<dyn PluginMetaCache>,
    pub plugin_loader: Arc<dyn PluginLoader>,
    pub nav_builder: Arc<dyn NavModelBuilder>,
    pub navigator: Arc<dyn Navigator>,
    pub settings: FrontendSettingsRefresher,
}

impl Collaborators {
    /// Default plugin cache, loader and nav builder around `api`
    pub fn with_defaults(
        api: Arc<dyn BackendApi>,
        navigator: Arc<dyn Navigator>,
        settings: FrontendSettingsRefresher,
    ) -> Self {
        Self {
            plugin_cache: Arc::new(PluginSettingsCache::new(api)),
            plugin_loader: Arc::new(ModulePluginLoader::new()),
            nav_builder: Arc::new(DataSourceNavBuilder),
            navigator,
            settings,
        }
    }
}

/// Data source lifecycle controller
///
/// The only writer of its [`DataSourceStore`] and [`NavIndex`].
pub struct DataSourceController {
    api: Arc<dyn BackendApi>,
    store: DataSourceStore,
    nav_index: NavIndex,
    plugin_cache: Arc<dyn PluginMetaCache>,
    plugin_loader: Arc<dyn PluginLoader>,
    nav_builder: Arc<dyn NavModelBuilder>,
    navigator: Arc<dyn Navigator>,
    settings: FrontendSettingsRefresher,
}

impl DataSourceController {
    pub fn new(api: Arc<dyn BackendApi>, collaborators: Collaborators) -> Self {
        Self {
            api,
            store: DataSourceStore::new(),
            nav_index: NavIndex::new(),
            plugin_cache: collaborators.plugin_cache,
            plugin_loader: collaborators.plugin_loader,
            nav_builder: collaborators.nav_builder,
            navigator: collaborators.navigator,
            settings: collaborators.settings,
        }
    }

    /// Read access to the record store
    pub fn store(&self) -> &DataSourceStore {
        &self.store
    }

    /// Navigation contexts published by [`DataSourceController::load_one`]
    pub fn nav_index(&self) -> &NavIndex {
        &self.nav_index
    }

    /// Global settings snapshot kept current by update/delete
    pub fn settings(&self) -> &SettingsHandle {
        self.settings.settings()
    }

    /// Fetch every data source and replace the store contents
    pub async fn list(&self) -> Result<Vec<DataSourceRecord>> {
        let records = self.api.list_data_sources().await?;
        tracing::debug!("Loaded {} data source(s)", records.len());

        self.store.replace_all(records.clone());
        Ok(records)
    }

    /// Load one data source with its plugin and publish its navigation context
    ///
    /// Nothing is published unless the record, its plugin metadata and the
    /// plugin module all load.
    pub async fn load_one(&self, id: i64) -> Result<NavigationContext> {
        let record = self.api.get_data_source(id).await?;
        let meta = self.plugin_cache.get(&record.plugin_type).await?;
        let plugin = self.plugin_loader.import(&meta).await?;

        tracing::debug!("Loaded data source {} ({})", record.name, meta.id);

        let nav = self.nav_builder.build(&record, &plugin);
        self.store.upsert(record, plugin.meta);
        self.nav_index.publish(nav.clone());

        Ok(nav)
    }

    /// Create a data source from a plugin template and navigate to its edit view
    ///
    /// The first data source becomes the default. A colliding name gets a
    /// numeric suffix. Two concurrent creates with the same name can both
    /// pass the local check; the server has the final word.
    pub async fn create(&self, plugin: &PluginMeta) -> Result<i64> {
        self.list().await?;

        let existing = self.store.names();
        let mut new_instance = NewDataSource {
            name: plugin.name.clone(),
            plugin_type: plugin.id.clone(),
            access: Access::Proxy,
            is_default: existing.is_empty(),
        };

        if name_exists(&existing, &new_instance.name) {
            new_instance.name = find_new_name(&existing, &new_instance.name);
        }

        let created = self.api.create_data_source(&new_instance).await?;

        tracing::info!(
            "Created data source '{}' (id {}, type {})",
            new_instance.name,
            created.id,
            new_instance.plugin_type
        );

        self.navigator.go_to(&edit_path(created.id));
        Ok(created.id)
    }

    /// Save a data source, refresh global settings, then reload it
    pub async fn update(&self, record: &DataSourceRecord) -> Result<NavigationContext> {
        self.api.update_data_source(record).await?;
        tracing::info!("Updated data source '{}' (id {})", record.name, record.id);

        self.settings.refresh().await?;
        self.load_one(record.id).await
    }

    /// Delete a data source, refresh global settings, then go back to the list
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete_data_source(id).await?;
        self.store.remove(id);
        self.nav_index.remove(&nav_id(id));
        tracing::info!("Deleted data source {}", id);

        self.settings.refresh().await?;
        self.navigator.go_to(DATA_SOURCES_PATH);
        Ok(())
    }
}
