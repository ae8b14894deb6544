//! Data source record schema
//!
//! Mirrors the JSON documents returned by `/api/datasources`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How the frontend reaches the data source
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    /// Requests go through the server
    #[default]
    Proxy,
    /// Requests go straight from the browser
    Direct,
}

impl Access {
    pub fn as_str(&self) -> &'static str {
        match self {
            Access::Proxy => "proxy",
            Access::Direct => "direct",
        }
    }
}

impl std::fmt::Display for Access {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored data source configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceRecord {
    pub id: i64,

    #[serde(default)]
    pub org_id: i64,

    /// Unique name (case-insensitive)
    pub name: String,

    /// Plugin identifier
    #[serde(rename = "type")]
    pub plugin_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_logo_url: Option<String>,

    #[serde(default)]
    pub access: Access,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub user: String,

    #[serde(default)]
    pub database: String,

    #[serde(default)]
    pub basic_auth: bool,

    #[serde(default)]
    pub basic_auth_user: String,

    #[serde(default)]
    pub with_credentials: bool,

    #[serde(default)]
    pub is_default: bool,

    /// Plugin specific settings
    #[serde(default)]
    pub json_data: serde_json::Value,

    /// Which secure fields have been set (values are never returned)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub secure_json_fields: HashMap<String, bool>,

    #[serde(default)]
    pub read_only: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    /// Fields not modelled above (`uid`, `secureJsonData`, ...), sent back unchanged
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DataSourceRecord {
    /// Minimal record, mostly useful for fixtures
    pub fn new(id: i64, name: impl Into<String>, plugin_type: impl Into<String>) -> Self {
        Self {
            id,
            org_id: 0,
            name: name.into(),
            plugin_type: plugin_type.into(),
            type_logo_url: None,
            access: Access::Proxy,
            url: String::new(),
            user: String::new(),
            database: String::new(),
            basic_auth: false,
            basic_auth_user: String::new(),
            with_credentials: false,
            is_default: false,
            json_data: serde_json::Value::Null,
            secure_json_fields: HashMap::new(),
            read_only: false,
            version: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// Body of a create request, built from a plugin template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewDataSource {
    pub name: String,
    #[serde(rename = "type")]
    pub plugin_type: String,
    pub access: Access,
    pub is_default: bool,
}

/// Response of `POST /api/datasources`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedDataSource {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
