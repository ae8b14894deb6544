//! Plugin catalog loader
//!
//! Fetches enabled data source plugins and publishes them together with their
//! categories as one state update.

use super::Categorizer;
use crate::api::BackendApi;
use crate::error::Result;
use crate::models::{PluginCategory, PluginMeta};
use std::sync::Arc;
use tokio::sync::watch;

/// Observable catalog state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub is_loading: bool,
    pub plugins: Vec<PluginMeta>,
    pub categories: Vec<PluginCategory>,
}

/// Data source plugin catalog
pub struct PluginCatalog {
    api: Arc<dyn BackendApi>,
    categorizer: Arc<dyn Categorizer>,
    state: watch::Sender<CatalogState>,
}

impl PluginCatalog {
    pub fn new(api: Arc<dyn BackendApi>, categorizer: Arc<dyn Categorizer>) -> Self {
        let (state, _rx) = watch::channel(CatalogState::default());
        Self {
            api,
            categorizer,
            state,
        }
    }

    /// Load the plugin list and its categories
    ///
    /// On failure the loading flag is cleared and the previously published
    /// plugins and categories stay in place.
    pub async fn load_plugins(&self) -> Result<()> {
        self.state.send_modify(|state| state.is_loading = true);

        let plugins = match self.api.list_plugins().await {
            Ok(plugins) => plugins,
            Err(e) => {
                tracing::warn!("Failed to load data source plugins: {}", e);
                self.state.send_modify(|state| state.is_loading = false);
                return Err(e);
            }
        };

        let categories = self.categorizer.build(&plugins);

        tracing::info!(
            "Loaded {} data source plugin(s) in {} categories",
            plugins.len(),
            categories.len()
        );

        self.state.send_replace(CatalogState {
            is_loading: false,
            plugins,
            categories,
        });

        Ok(())
    }

    /// Look up a loaded plugin by id
    pub fn find(&self, plugin_id: &str) -> Option<PluginMeta> {
        self.state
            .borrow()
            .plugins
            .iter()
            .find(|p| p.id == plugin_id)
            .cloned()
    }

    pub fn snapshot(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockBackendApi;
    use crate::error::DataSourceError;
    use crate::plugins::DefaultCategorizer;
    use crate::plugins::categories::MockCategorizer;

    #[tokio::test]
    async fn test_publishes_plugins_and_categories_together() {
        let mut api = MockBackendApi::new();
        api.expect_list_plugins()
            .times(1)
            .returning(|| Ok(vec![PluginMeta::new("loki", "Loki")]));

        let mut categorizer = MockCategorizer::new();
        categorizer
            .expect_build()
            .withf(|plugins| plugins.len() == 1)
            .times(1)
            .returning(|plugins| {
                vec![PluginCategory {
                    id: "logging".to_string(),
                    title: "Logging & document databases".to_string(),
                    plugins: plugins.to_vec(),
                }]
            });

        let catalog = PluginCatalog::new(Arc::new(api), Arc::new(categorizer));
        let mut rx = catalog.subscribe();

        catalog.load_plugins().await.unwrap();

        // Every published state either has both or neither
        let state = rx.borrow_and_update().clone();
        assert!(!state.is_loading);
        assert_eq!(state.plugins.len(), 1);
        assert_eq!(state.categories[0].plugins[0].id, "loki");
        assert_eq!(catalog.find("loki").unwrap().name, "Loki");
        assert!(catalog.find("mysql").is_none());
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_catalog() {
        let mut api = MockBackendApi::new();
        let mut calls = 0;
        api.expect_list_plugins().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(vec![PluginMeta::new("mysql", "MySQL")])
            } else {
                Err(DataSourceError::RemoteRequest {
                    status: 500,
                    body: "oops".to_string(),
                })
            }
        });

        let catalog = PluginCatalog::new(Arc::new(api), Arc::new(DefaultCategorizer));

        catalog.load_plugins().await.unwrap();
        let before = catalog.snapshot();

        assert!(catalog.load_plugins().await.is_err());
        let after = catalog.snapshot();

        assert!(!after.is_loading);
        assert_eq!(after, before);
    }
}
