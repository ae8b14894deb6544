//! Wiring of the controller, catalog and settings services around one backend

use crate::api::{BackendApi, HttpBackend};
use crate::config::Config;
use crate::datasources::{Collaborators, DataSourceController};
use crate::plugins::{DefaultCategorizer, PluginCatalog};
use crate::services::{
    DataSourceResolutionService, FrontendSettingsRefresher, LocationState, SettingsHandle,
};
use anyhow::Result;
use std::sync::Arc;

/// Everything a command needs, sharing one settings snapshot
pub struct Session {
    pub controller: DataSourceController,
    pub catalog: PluginCatalog,
    pub refresher: FrontendSettingsRefresher,
    pub resolver: Arc<DataSourceResolutionService>,
    pub location: LocationState,
}

impl Session {
    /// Connect to the server named in the configuration
    pub fn connect(config: &Config) -> Result<Self> {
        let backend = HttpBackend::new(&config.server)?;
        tracing::debug!("Using server {}", backend.base_url());
        Ok(Self::with_backend(Arc::new(backend)))
    }

    pub fn with_backend(api: Arc<dyn BackendApi>) -> Self {
        let settings = SettingsHandle::default();
        let resolver = Arc::new(DataSourceResolutionService::new(settings.clone()));
        let refresher = FrontendSettingsRefresher::new(api.clone(), settings, resolver.clone());
        let location = LocationState::new();

        let collaborators = Collaborators::with_defaults(
            api.clone(),
            Arc::new(location.clone()),
            refresher.clone(),
        );

        Self {
            controller: DataSourceController::new(api.clone(), collaborators),
            catalog: PluginCatalog::new(api, Arc::new(DefaultCategorizer)),
            refresher,
            resolver,
            location,
        }
    }
}
