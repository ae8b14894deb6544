//! Plugin settings cache
//!
//! Caches plugin metadata fetched from `/api/plugins/{id}/settings`.
//! Entries never expire; plugin metadata is immutable once loaded.

use super::PluginMetaCache;
use crate::api::BackendApi;
use crate::error::Result;
use crate::models::PluginMeta;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Plugin metadata cache
pub struct PluginSettingsCache {
    api: Arc<dyn BackendApi>,
    /// Cached metadata keyed by plugin id
    cache: RwLock<HashMap<String, PluginMeta>>,
}

impl PluginSettingsCache {
    /// Create a new, empty plugin cache
    pub fn new(api: Arc<dyn BackendApi>) -> Self {
        Self {
            api,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Seed the cache, e.g. from an already loaded plugin list
    pub async fn insert(&self, meta: PluginMeta) {
        let mut cache = self.cache.write().await;
        cache.insert(meta.id.clone(), meta);
    }

    /// Drop a cached entry so the next lookup refetches it
    pub async fn invalidate(&self, plugin_id: &str) -> bool {
        let mut cache = self.cache.write().await;
        cache.remove(plugin_id).is_some()
    }

    /// Get cache statistics
    pub async fn stats(&self) -> CacheStats {
        let cache = self.cache.read().await;
        CacheStats {
            total_entries: cache.len(),
        }
    }
}

#[async_trait]
impl PluginMetaCache for PluginSettingsCache {
    async fn get(&self, plugin_id: &str) -> Result<PluginMeta> {
        {
            let cache = self.cache.read().await;
            if let Some(meta) = cache.get(plugin_id) {
                return Ok(meta.clone());
            }
        }

        tracing::debug!("Fetching plugin settings for: {}", plugin_id);

        let meta = self.api.plugin_settings(plugin_id).await?;

        let mut cache = self.cache.write().await;
        cache.insert(plugin_id.to_string(), meta.clone());

        Ok(meta)
    }
}

/// Cache statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    /// Total number of cached entries
    pub total_entries: usize,
}
