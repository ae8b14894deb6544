//! Navigation model
//!
//! Read-only routing structures derived from a data source and its plugin.

use serde::{Deserialize, Serialize};

/// Navigation context for one data source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationContext {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    pub url: String,
    #[serde(default)]
    pub breadcrumbs: Vec<Breadcrumb>,
    #[serde(default)]
    pub children: Vec<NavItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Breadcrumb {
    pub title: String,
    pub url: String,
}

/// A tab within a navigation context
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavItem {
    pub id: String,
    pub text: String,
    pub icon: String,
    pub url: String,
    #[serde(default)]
    pub active: bool,
}

impl NavigationContext {
    /// Find a child tab by id
    pub fn child(&self, id: &str) -> Option<&NavItem> {
        self.children.iter().find(|c| c.id == id)
    }
}
