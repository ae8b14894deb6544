//! Tests for the plugin catalog and plugin metadata cache

mod common;

use common::{FakeBackend, plugin};
use dsadmin::plugins::{DefaultCategorizer, PluginCatalog, PluginMetaCache, PluginSettingsCache};
use std::sync::Arc;

fn catalog_backend() -> Arc<FakeBackend> {
    let fake = FakeBackend::new();
    fake.add_plugin(plugin("influxdb", "InfluxDB", Some("tsdb")));
    fake.add_plugin(plugin("prometheus", "Prometheus", Some("tsdb")));
    fake.add_plugin(plugin("postgres", "PostgreSQL", Some("sql")));
    fake.add_plugin(plugin("mssql", "Microsoft SQL Server", Some("sql")));
    fake.add_plugin(plugin("mysql", "MySQL", Some("sql")));
    fake.add_plugin(plugin("testdata", "TestData DB", None));

    let mut splunk = plugin("splunk", "Splunk", Some("logging"));
    splunk.enterprise = true;
    fake.add_plugin(splunk);

    Arc::new(fake)
}

#[tokio::test]
async fn test_catalog_groups_and_sorts() {
    let fake = catalog_backend();
    let catalog = PluginCatalog::new(fake.clone(), Arc::new(DefaultCategorizer));

    catalog.load_plugins().await.unwrap();
    let state = catalog.snapshot();

    assert!(!state.is_loading);
    assert_eq!(state.plugins.len(), 7);

    let ids = |category: &str| -> Vec<String> {
        state
            .categories
            .iter()
            .find(|c| c.id == category)
            .map(|c| c.plugins.iter().map(|p| p.id.clone()).collect())
            .unwrap_or_default()
    };

    assert_eq!(ids("tsdb"), vec!["prometheus", "influxdb"]);
    assert_eq!(ids("sql"), vec!["mysql", "postgres", "mssql"]);
    assert_eq!(ids("enterprise"), vec!["splunk"]);
    assert_eq!(ids("other"), vec!["testdata"]);
    assert!(ids("logging").is_empty());
}

#[tokio::test]
async fn test_catalog_failure_keeps_previous_state() {
    let fake = catalog_backend();
    let catalog = PluginCatalog::new(fake.clone(), Arc::new(DefaultCategorizer));
    let mut rx = catalog.subscribe();

    catalog.load_plugins().await.unwrap();
    let loaded = catalog.snapshot();

    fake.fail_plugins(true);
    let err = catalog.load_plugins().await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert_eq!(catalog.snapshot(), loaded);
    assert!(!rx.borrow_and_update().is_loading);
}

#[tokio::test]
async fn test_settings_cache_fetches_once() {
    let fake = catalog_backend();
    let cache = PluginSettingsCache::new(fake.clone());

    let first = cache.get("mysql").await.unwrap();
    let second = cache.get("mysql").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(fake.count_calls("GET /api/plugins/mysql/settings"), 1);
    assert_eq!(cache.stats().await.total_entries, 1);
}

#[tokio::test]
async fn test_settings_cache_does_not_keep_failures() {
    let fake = catalog_backend();
    let cache = PluginSettingsCache::new(fake.clone());

    assert!(cache.get("elasticsearch").await.is_err());
    fake.add_plugin(plugin("elasticsearch", "Elasticsearch", Some("logging")));

    let meta = cache.get("elasticsearch").await.unwrap();
    assert_eq!(meta.name, "Elasticsearch");
    assert_eq!(fake.count_calls("GET /api/plugins/elasticsearch/settings"), 2);
}
