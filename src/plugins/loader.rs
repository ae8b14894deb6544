//! Plugin module loader
//!
//! Resolves a plugin's module from its metadata and keeps every imported
//! module around so repeated imports are free.

use super::{LoadedPlugin, PluginLoader};
use crate::error::{DataSourceError, Result};
use crate::models::PluginMeta;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Default plugin loader
#[derive(Default)]
pub struct ModulePluginLoader {
    /// Imported modules keyed by plugin id
    loaded: RwLock<HashMap<String, LoadedPlugin>>,
}

impl ModulePluginLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of plugins imported so far
    pub async fn loaded_ids(&self) -> Vec<String> {
        let loaded = self.loaded.read().await;
        let mut ids: Vec<_> = loaded.keys().cloned().collect();
        ids.sort();
        ids
    }
}

#[async_trait]
impl PluginLoader for ModulePluginLoader {
    async fn import(&self, meta: &PluginMeta) -> Result<LoadedPlugin> {
        if meta.module.trim().is_empty() {
            return Err(DataSourceError::PluginLoad(format!(
                "plugin '{}' declares no module",
                meta.id
            )));
        }

        {
            let loaded = self.loaded.read().await;
            if let Some(plugin) = loaded.get(&meta.id) {
                if plugin.meta == *meta {
                    return Ok(plugin.clone());
                }
            }
        }

        tracing::debug!("Importing plugin module: {}", meta.module);

        let plugin = LoadedPlugin {
            meta: meta.clone(),
            module_path: meta.module.clone(),
        };

        let mut loaded = self.loaded.write().await;
        loaded.insert(meta.id.clone(), plugin.clone());

        Ok(plugin)
    }
}
