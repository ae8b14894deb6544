//! Global settings snapshot and its refresher
//!
//! The settings snapshot is process-wide state read by collaborators outside
//! this crate. It is only replaced through [`FrontendSettingsRefresher`].

use super::resolution::DataSourceResolver;
use crate::api::BackendApi;
use crate::error::Result;
use crate::models::{DataSourceInstanceSettings, GlobalSettings};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::watch;

/// Shared handle to the global settings snapshot
#[derive(Clone)]
pub struct SettingsHandle {
    tx: Arc<watch::Sender<GlobalSettings>>,
}

impl SettingsHandle {
    pub fn new(initial: GlobalSettings) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Clone of the current snapshot
    pub fn snapshot(&self) -> GlobalSettings {
        self.tx.borrow().clone()
    }

    pub fn default_datasource(&self) -> String {
        self.tx.borrow().default_datasource.clone()
    }

    pub fn datasources(&self) -> BTreeMap<String, DataSourceInstanceSettings> {
        self.tx.borrow().datasources.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<GlobalSettings> {
        self.tx.subscribe()
    }

    /// Swap in a new data source list and default, leaving other fields as they are
    fn replace_data_sources(
        &self,
        datasources: BTreeMap<String, DataSourceInstanceSettings>,
        default_datasource: String,
    ) {
        self.tx.send_modify(|settings| {
            settings.datasources = datasources;
            settings.default_datasource = default_datasource;
        });
    }
}

impl Default for SettingsHandle {
    fn default() -> Self {
        Self::new(GlobalSettings::default())
    }
}

/// Re-pulls the frontend settings after a mutation
#[derive(Clone)]
pub struct FrontendSettingsRefresher {
    api: Arc<dyn BackendApi>,
    settings: SettingsHandle,
    resolver: Arc<dyn DataSourceResolver>,
}

impl FrontendSettingsRefresher {
    pub fn new(
        api: Arc<dyn BackendApi>,
        settings: SettingsHandle,
        resolver: Arc<dyn DataSourceResolver>,
    ) -> Self {
        Self {
            api,
            settings,
            resolver,
        }
    }

    pub fn settings(&self) -> &SettingsHandle {
        &self.settings
    }

    /// Fetch fresh settings, replace the data source fields and reinitialize
    /// the resolution service
    pub async fn refresh(&self) -> Result<()> {
        let fresh = self.api.frontend_settings().await?;

        tracing::debug!(
            "Refreshed frontend settings: {} data source(s), default '{}'",
            fresh.datasources.len(),
            fresh.default_datasource
        );

        self.settings
            .replace_data_sources(fresh.datasources, fresh.default_datasource);
        self.resolver.reinit();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockBackendApi;
    use crate::error::DataSourceError;
    use crate::services::resolution::MockDataSourceResolver;

    fn settings_with(names: &[&str], default: &str) -> GlobalSettings {
        GlobalSettings {
            datasources: names
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    (
                        name.to_string(),
                        DataSourceInstanceSettings::new(i as i64 + 1, *name, "prometheus"),
                    )
                })
                .collect(),
            default_datasource: default.to_string(),
            extra: Default::default(),
        }
    }

    #[tokio::test]
    async fn test_refresh_replaces_data_source_fields_only() {
        let mut initial = settings_with(&["old"], "old");
        initial
            .extra
            .insert("appUrl".to_string(), serde_json::json!("http://localhost:3000/"));
        let handle = SettingsHandle::new(initial);

        let mut api = MockBackendApi::new();
        api.expect_frontend_settings()
            .times(1)
            .returning(|| Ok(settings_with(&["a", "b"], "b")));

        let mut resolver = MockDataSourceResolver::new();
        resolver.expect_reinit().times(1).return_const(());

        let refresher =
            FrontendSettingsRefresher::new(Arc::new(api), handle.clone(), Arc::new(resolver));
        refresher.refresh().await.unwrap();

        let snapshot = handle.snapshot();
        assert_eq!(snapshot.default_datasource, "b");
        assert_eq!(snapshot.datasources.len(), 2);
        assert_eq!(snapshot.extra["appUrl"], "http://localhost:3000/");
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_snapshot() {
        let handle = SettingsHandle::new(settings_with(&["old"], "old"));

        let mut api = MockBackendApi::new();
        api.expect_frontend_settings().times(1).returning(|| {
            Err(DataSourceError::RemoteRequest {
                status: 502,
                body: "bad gateway".to_string(),
            })
        });

        let mut resolver = MockDataSourceResolver::new();
        resolver.expect_reinit().never();

        let refresher =
            FrontendSettingsRefresher::new(Arc::new(api), handle.clone(), Arc::new(resolver));

        assert!(refresher.refresh().await.is_err());
        assert_eq!(handle.snapshot(), settings_with(&["old"], "old"));
    }
}
