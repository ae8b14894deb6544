//! In-memory backend shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use dsadmin::error::{DataSourceError, Result};
use dsadmin::models::{
    CreatedDataSource, DataSourceInstanceSettings, DataSourceRecord, GlobalSettings,
    NewDataSource, PluginMeta,
};
use dsadmin::BackendApi;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
struct FakeState {
    records: BTreeMap<i64, DataSourceRecord>,
    plugins: Vec<PluginMeta>,
    next_id: i64,
    calls: Vec<String>,
    fail_plugins: bool,
}

/// Server stand-in that keeps records in memory and logs every call
#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<FakeState>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<DataSourceRecord>) -> Self {
        let fake = Self::new();
        for record in records {
            fake.insert(record);
        }
        fake
    }

    pub fn insert(&self, record: DataSourceRecord) {
        let mut state = self.state.lock().unwrap();
        state.next_id = state.next_id.max(record.id);
        state.records.insert(record.id, record);
    }

    pub fn add_plugin(&self, meta: PluginMeta) {
        self.state.lock().unwrap().plugins.push(meta);
    }

    pub fn fail_plugins(&self, fail: bool) {
        self.state.lock().unwrap().fail_plugins = fail;
    }

    pub fn record(&self, id: i64) -> Option<DataSourceRecord> {
        self.state.lock().unwrap().records.get(&id).cloned()
    }

    /// Calls received so far, e.g. `"GET /api/datasources/1"`
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count_calls(&self, call: &str) -> usize {
        self.calls().iter().filter(|c| *c == call).count()
    }

    fn log(&self, call: String) {
        self.state.lock().unwrap().calls.push(call);
    }
}

/// A plugin with an importable module
pub fn plugin(id: &str, name: &str, category: Option<&str>) -> PluginMeta {
    let mut meta = PluginMeta::new(id, name);
    meta.category = category.map(str::to_string);
    meta.module = format!("app/plugins/datasource/{id}/module");
    meta.base_url = format!("public/app/plugins/datasource/{id}");
    meta
}

#[async_trait]
impl BackendApi for FakeBackend {
    async fn list_data_sources(&self) -> Result<Vec<DataSourceRecord>> {
        self.log("GET /api/datasources".to_string());
        let state = self.state.lock().unwrap();
        Ok(state.records.values().cloned().collect())
    }

    async fn get_data_source(&self, id: i64) -> Result<DataSourceRecord> {
        self.log(format!("GET /api/datasources/{id}"));
        self.record(id)
            .ok_or_else(|| DataSourceError::NotFound(format!("/api/datasources/{id}")))
    }

    async fn create_data_source(&self, data_source: &NewDataSource) -> Result<CreatedDataSource> {
        self.log("POST /api/datasources".to_string());
        let mut state = self.state.lock().unwrap();

        let taken = state
            .records
            .values()
            .any(|r| r.name.eq_ignore_ascii_case(&data_source.name));
        if taken {
            return Err(DataSourceError::RemoteRequest {
                status: 409,
                body: "Data source with the same name already exists".to_string(),
            });
        }

        state.next_id += 1;
        let id = state.next_id;

        let mut record = DataSourceRecord::new(id, &data_source.name, &data_source.plugin_type);
        record.access = data_source.access;
        record.is_default = data_source.is_default;
        state.records.insert(id, record);

        Ok(CreatedDataSource {
            id,
            name: Some(data_source.name.clone()),
            message: Some("Datasource added".to_string()),
        })
    }

    async fn update_data_source(&self, data_source: &DataSourceRecord) -> Result<()> {
        self.log(format!("PUT /api/datasources/{}", data_source.id));
        let mut state = self.state.lock().unwrap();

        match state.records.get_mut(&data_source.id) {
            Some(existing) => {
                *existing = data_source.clone();
                Ok(())
            }
            None => Err(DataSourceError::NotFound(format!(
                "/api/datasources/{}",
                data_source.id
            ))),
        }
    }

    async fn delete_data_source(&self, id: i64) -> Result<()> {
        self.log(format!("DELETE /api/datasources/{id}"));
        let mut state = self.state.lock().unwrap();
        state
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DataSourceError::NotFound(format!("/api/datasources/{id}")))
    }

    async fn list_plugins(&self) -> Result<Vec<PluginMeta>> {
        self.log("GET /api/plugins".to_string());
        let state = self.state.lock().unwrap();
        if state.fail_plugins {
            return Err(DataSourceError::RemoteRequest {
                status: 503,
                body: "plugin service unavailable".to_string(),
            });
        }
        Ok(state.plugins.clone())
    }

    async fn plugin_settings(&self, plugin_id: &str) -> Result<PluginMeta> {
        self.log(format!("GET /api/plugins/{plugin_id}/settings"));
        let state = self.state.lock().unwrap();
        state
            .plugins
            .iter()
            .find(|p| p.id == plugin_id)
            .cloned()
            .ok_or_else(|| DataSourceError::NotFound(format!("/api/plugins/{plugin_id}/settings")))
    }

    async fn frontend_settings(&self) -> Result<GlobalSettings> {
        self.log("GET /api/frontend/settings".to_string());
        let state = self.state.lock().unwrap();

        let mut settings = GlobalSettings::default();
        for record in state.records.values() {
            if record.is_default {
                settings.default_datasource = record.name.clone();
            }
            let mut entry =
                DataSourceInstanceSettings::new(record.id, &record.name, &record.plugin_type);
            entry.is_default = record.is_default;
            settings.datasources.insert(record.name.clone(), entry);
        }

        Ok(settings)
    }
}
