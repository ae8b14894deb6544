//! Data source resolution service
//!
//! Answers "which data source does this name refer to" for the rest of the
//! application, based on the global settings snapshot.

use super::settings::SettingsHandle;
use crate::models::DataSourceInstanceSettings;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Something that caches data source lookups and must be told when the
/// settings snapshot changes
#[cfg_attr(test, mockall::automock)]
pub trait DataSourceResolver: Send + Sync {
    fn reinit(&self);
}

#[derive(Debug, Default)]
struct ResolverIndex {
    by_name: HashMap<String, DataSourceInstanceSettings>,
    by_id: HashMap<i64, String>,
    default_name: Option<String>,
}

/// Default resolver backed by the settings snapshot
pub struct DataSourceResolutionService {
    settings: SettingsHandle,
    index: RwLock<ResolverIndex>,
}

impl DataSourceResolutionService {
    /// Create a resolver and build its index from the current snapshot
    pub fn new(settings: SettingsHandle) -> Self {
        let service = Self {
            settings,
            index: RwLock::new(ResolverIndex::default()),
        };
        service.reinit();
        service
    }

    /// Resolve by name; `None` or `"default"` resolves the default data source
    pub fn get(&self, name: Option<&str>) -> Option<DataSourceInstanceSettings> {
        let index = self.index.read().unwrap_or_else(PoisonError::into_inner);
        let name = match name {
            None | Some("default") => index.default_name.as_deref()?,
            Some(name) => name,
        };
        index.by_name.get(name).cloned()
    }

    pub fn get_by_id(&self, id: i64) -> Option<DataSourceInstanceSettings> {
        let index = self.index.read().unwrap_or_else(PoisonError::into_inner);
        index
            .by_id
            .get(&id)
            .and_then(|name| index.by_name.get(name))
            .cloned()
    }

    /// All known data sources sorted by name
    pub fn list(&self) -> Vec<DataSourceInstanceSettings> {
        let index = self.index.read().unwrap_or_else(PoisonError::into_inner);
        let mut all: Vec<_> = index.by_name.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }
}

impl DataSourceResolver for DataSourceResolutionService {
    fn reinit(&self) {
        let snapshot = self.settings.snapshot();

        let by_id = snapshot
            .datasources
            .iter()
            .map(|(name, ds)| (ds.id, name.clone()))
            .collect();
        let default_name =
            (!snapshot.default_datasource.is_empty()).then_some(snapshot.default_datasource);

        let mut index = self.index.write().unwrap_or_else(PoisonError::into_inner);
        *index = ResolverIndex {
            by_name: snapshot.datasources.into_iter().collect(),
            by_id,
            default_name,
        };

        tracing::debug!("Data source resolver reinitialized ({} entries)", index.by_name.len());
    }
}
