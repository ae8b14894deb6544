//! Navigation model for a loaded data source

use crate::models::{Breadcrumb, DataSourceRecord, NavItem, NavigationContext};
use crate::plugins::LoadedPlugin;

/// Id of the navigation context published for data source `id`
pub fn nav_id(id: i64) -> String {
    format!("datasource-{id}")
}

/// Builds the navigation context for a data source and its plugin
#[cfg_attr(test, mockall::automock)]
pub trait NavModelBuilder: Send + Sync {
    fn build(&self, record: &DataSourceRecord, plugin: &LoadedPlugin) -> NavigationContext;
}

/// Default builder: a Settings tab, plus Dashboards when the plugin ships any
#[derive(Debug, Default, Clone, Copy)]
pub struct DataSourceNavBuilder;

impl NavModelBuilder for DataSourceNavBuilder {
    fn build(&self, record: &DataSourceRecord, plugin: &LoadedPlugin) -> NavigationContext {
        let meta = &plugin.meta;
        let id = record.id;

        let mut children = vec![NavItem {
            id: format!("datasource-settings-{id}"),
            text: "Settings".to_string(),
            icon: "fa fa-fw fa-sliders".to_string(),
            url: format!("datasources/edit/{id}/"),
            active: false,
        }];

        if meta.has_dashboards() {
            children.push(NavItem {
                id: format!("datasource-dashboards-{id}"),
                text: "Dashboards".to_string(),
                icon: "gicon gicon-dashboard".to_string(),
                url: format!("datasources/edit/{id}/dashboards"),
                active: false,
            });
        }

        let logo = &meta.info.logos.large;

        NavigationContext {
            id: nav_id(id),
            text: record.name.clone(),
            sub_title: Some(format!("Type: {}", meta.name)),
            img: (!logo.is_empty()).then(|| logo.clone()),
            url: String::new(),
            breadcrumbs: vec![Breadcrumb {
                title: "Data Sources".to_string(),
                url: "datasources".to_string(),
            }],
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PluginInclude, PluginMeta};

    fn loaded(meta: PluginMeta) -> LoadedPlugin {
        LoadedPlugin {
            module_path: meta.module.clone(),
            meta,
        }
    }

    #[test]
    fn test_settings_only() {
        let record = DataSourceRecord::new(3, "My MySQL", "mysql");
        let nav = DataSourceNavBuilder.build(&record, &loaded(PluginMeta::new("mysql", "MySQL")));

        assert_eq!(nav.id, "datasource-3");
        assert_eq!(nav.text, "My MySQL");
        assert_eq!(nav.sub_title.as_deref(), Some("Type: MySQL"));
        assert!(nav.img.is_none());
        assert_eq!(nav.children.len(), 1);
        assert_eq!(
            nav.child("datasource-settings-3").unwrap().url,
            "datasources/edit/3/"
        );
    }

    #[test]
    fn test_dashboards_tab_when_plugin_ships_dashboards() {
        let mut meta = PluginMeta::new("prometheus", "Prometheus");
        meta.info.logos.large = "img/prometheus_logo.svg".to_string();
        meta.includes.push(PluginInclude {
            include_type: "dashboard".to_string(),
            name: "Prometheus Stats".to_string(),
            path: "dashboards/prometheus_stats.json".to_string(),
        });

        let record = DataSourceRecord::new(8, "prom", "prometheus");
        let nav = DataSourceNavBuilder.build(&record, &loaded(meta));

        assert_eq!(nav.img.as_deref(), Some("img/prometheus_logo.svg"));
        let tab = nav.child("datasource-dashboards-8").unwrap();
        assert_eq!(tab.url, "datasources/edit/8/dashboards");
    }
}
