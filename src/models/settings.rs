//! Frontend settings document
//!
//! `/api/frontend/settings` returns a large document. Only the data source
//! fields are typed; everything else is carried through untouched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Process-wide settings snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    /// Known data sources keyed by name
    #[serde(default)]
    pub datasources: BTreeMap<String, DataSourceInstanceSettings>,

    /// Name of the default data source
    #[serde(default)]
    pub default_datasource: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Per data source entry of the settings document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceInstanceSettings {
    #[serde(default)]
    pub id: i64,

    pub name: String,

    #[serde(rename = "type")]
    pub plugin_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default)]
    pub is_default: bool,

    #[serde(default)]
    pub json_data: serde_json::Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl DataSourceInstanceSettings {
    pub fn new(id: i64, name: impl Into<String>, plugin_type: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            plugin_type: plugin_type.into(),
            url: None,
            is_default: false,
            json_data: serde_json::Value::Null,
            meta: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_unrelated_fields() {
        let json = r#"{
            "datasources": {
                "TestData": {"id": 1, "name": "TestData", "type": "testdata"}
            },
            "defaultDatasource": "TestData",
            "appUrl": "http://localhost:3000/",
            "buildInfo": {"version": "6.5.0"}
        }"#;

        let settings: GlobalSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.default_datasource, "TestData");
        assert_eq!(settings.datasources["TestData"].plugin_type, "testdata");
        assert_eq!(settings.extra["appUrl"], "http://localhost:3000/");
        assert!(settings.extra.contains_key("buildInfo"));
    }
}
