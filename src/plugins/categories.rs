//! Plugin categorization
//!
//! Groups the flat plugin list into the fixed set of catalog categories.

use crate::models::{PluginCategory, PluginMeta};

/// Builds catalog categories from a plugin list
#[cfg_attr(test, mockall::automock)]
pub trait Categorizer: Send + Sync {
    fn build(&self, plugins: &[PluginMeta]) -> Vec<PluginCategory>;
}

/// Catalog categories in display order
const CATEGORIES: &[(&str, &str)] = &[
    ("tsdb", "Time series databases"),
    ("logging", "Logging & document databases"),
    ("sql", "SQL"),
    ("cloud", "Cloud"),
    ("enterprise", "Enterprise plugins"),
    ("other", "Others"),
];

const ENTERPRISE: &str = "enterprise";
const OTHER: &str = "other";

/// Higher sorts first; unlisted plugins are 0
fn sort_priority(plugin_id: &str) -> i32 {
    match plugin_id {
        "prometheus" => 100,
        "graphite" => 95,
        "loki" => 90,
        "mysql" => 80,
        "postgres" => 79,
        _ => 0,
    }
}

/// Default categorizer
///
/// Enterprise plugins always land in `enterprise`; plugins with a missing or
/// unknown category land in `other`. Every category is returned, including
/// empty ones.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultCategorizer;

impl Categorizer for DefaultCategorizer {
    fn build(&self, plugins: &[PluginMeta]) -> Vec<PluginCategory> {
        let mut categories: Vec<PluginCategory> = CATEGORIES
            .iter()
            .map(|(id, title)| PluginCategory {
                id: id.to_string(),
                title: title.to_string(),
                plugins: Vec::new(),
            })
            .collect();

        for plugin in plugins {
            let wanted = if plugin.enterprise {
                ENTERPRISE
            } else {
                plugin.category.as_deref().unwrap_or(OTHER)
            };

            let index = categories
                .iter()
                .position(|c| c.id == wanted)
                .or_else(|| categories.iter().position(|c| c.id == OTHER));

            if let Some(index) = index {
                let mut plugin = plugin.clone();
                plugin.category = Some(categories[index].id.clone());
                categories[index].plugins.push(plugin);
            }
        }

        for category in &mut categories {
            category.plugins.sort_by(|a, b| {
                sort_priority(&b.id)
                    .cmp(&sort_priority(&a.id))
                    .then_with(|| a.name.cmp(&b.name))
            });
        }

        categories
    }
}
