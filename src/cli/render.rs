//! Plain-text rendering of command output

use crate::models::{DataSourceRecord, GlobalSettings, NavigationContext, PluginCategory};
use std::fmt::Write;

/// Join lines, dropping trailing padding
fn finish(lines: Vec<String>) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Data source table for `list`
pub fn data_source_table(records: &[DataSourceRecord]) -> String {
    if records.is_empty() {
        return "No data sources defined\n".to_string();
    }

    let row = |id: &str, name: &str, plugin: &str, access: &str, default: &str| {
        format!("{id:<5} {name:<24} {plugin:<14} {access:<8} {default}")
    };

    let mut lines = vec![row("ID", "NAME", "TYPE", "ACCESS", "DEFAULT")];
    for record in records {
        lines.push(row(
            &record.id.to_string(),
            &record.name,
            &record.plugin_type,
            record.access.as_str(),
            if record.is_default { "yes" } else { "" },
        ));
    }

    finish(lines)
}

/// Heading and tabs of a loaded data source
pub fn nav_summary(nav: &NavigationContext) -> String {
    let mut lines = vec![format!("{} ({})", nav.text, nav.id)];
    if let Some(sub_title) = &nav.sub_title {
        lines.push(sub_title.clone());
    }
    if let Some(img) = &nav.img {
        lines.push(format!("Logo: {img}"));
    }
    for child in &nav.children {
        lines.push(format!("  {:<12} {}", child.text, child.url));
    }
    finish(lines)
}

/// Plugin catalog grouped by category; empty categories are skipped
pub fn plugin_catalog(categories: &[PluginCategory]) -> String {
    let mut out = String::new();

    for category in categories.iter().filter(|c| !c.plugins.is_empty()) {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", category.title);
        for plugin in &category.plugins {
            let line = format!(
                "  {:<16} {:<24} {}",
                plugin.id,
                plugin.name,
                plugin.capabilities().join(",")
            );
            let _ = writeln!(out, "{}", line.trim_end());
        }
    }

    if out.is_empty() {
        out.push_str("No data source plugins available\n");
    }
    out
}

/// Data sources known to the global settings snapshot
pub fn settings_summary(settings: &GlobalSettings) -> String {
    let default = if settings.default_datasource.is_empty() {
        "(none)"
    } else {
        settings.default_datasource.as_str()
    };

    let mut lines = vec![format!("Default: {default}")];
    for (name, ds) in &settings.datasources {
        lines.push(format!("  {:<24} {:<14} id={}", name, ds.plugin_type, ds.id));
    }
    finish(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_outputs() {
        assert_eq!(data_source_table(&[]), "No data sources defined\n");
        assert_eq!(plugin_catalog(&[]), "No data source plugins available\n");
        assert_eq!(
            settings_summary(&GlobalSettings::default()),
            "Default: (none)\n"
        );
    }

    #[test]
    fn test_table_has_no_trailing_spaces() {
        let table = data_source_table(&[DataSourceRecord::new(1, "a", "loki")]);
        assert!(table.lines().all(|line| !line.ends_with(' ')));
    }
}
