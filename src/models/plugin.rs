//! Plugin metadata schema
//!
//! Describes data source plugin types as returned by `/api/plugins`
//! and `/api/plugins/{id}/settings`.

use serde::{Deserialize, Serialize};

/// Plugin descriptor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PluginMeta {
    /// Plugin id, used as the data source `type`
    pub id: String,

    /// Display name
    pub name: String,

    #[serde(rename = "type", default = "default_plugin_type")]
    pub plugin_type: String,

    /// Catalog category (e.g. "tsdb", "sql")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default)]
    pub enterprise: bool,

    // Capability tags
    #[serde(default)]
    pub metrics: bool,

    #[serde(default)]
    pub logs: bool,

    #[serde(default)]
    pub annotations: bool,

    #[serde(default)]
    pub alerting: bool,

    /// Module path relative to `base_url`
    #[serde(default)]
    pub module: String,

    #[serde(default)]
    pub base_url: String,

    #[serde(default)]
    pub info: PluginInfo,

    #[serde(default)]
    pub includes: Vec<PluginInclude>,
}

fn default_plugin_type() -> String {
    "datasource".to_string()
}

impl PluginMeta {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            plugin_type: default_plugin_type(),
            category: None,
            enterprise: false,
            metrics: false,
            logs: false,
            annotations: false,
            alerting: false,
            module: String::new(),
            base_url: String::new(),
            info: PluginInfo::default(),
            includes: Vec::new(),
        }
    }

    /// Capability tags that are set on this plugin
    pub fn capabilities(&self) -> Vec<&'static str> {
        [
            (self.metrics, "metrics"),
            (self.logs, "logs"),
            (self.annotations, "annotations"),
            (self.alerting, "alerting"),
        ]
        .into_iter()
        .filter_map(|(set, tag)| set.then_some(tag))
        .collect()
    }

    /// Whether the plugin bundles dashboards
    pub fn has_dashboards(&self) -> bool {
        self.includes.iter().any(|i| i.include_type == "dashboard")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PluginInfo {
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub logos: PluginLogos,

    #[serde(default)]
    pub links: Vec<PluginLink>,

    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PluginLogos {
    #[serde(default)]
    pub small: String,
    #[serde(default)]
    pub large: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PluginLink {
    pub name: String,
    pub url: String,
}

/// Something a plugin ships alongside itself (dashboards, pages)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PluginInclude {
    #[serde(rename = "type")]
    pub include_type: String,
    pub name: String,
    #[serde(default)]
    pub path: String,
}

/// A titled group of plugins in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PluginCategory {
    pub id: String,
    pub title: String,
    pub plugins: Vec<PluginMeta>,
}
