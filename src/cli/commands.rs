//! CLI command handlers

use super::render;
use super::session::Session;
use crate::models::DataSourceRecord;
use anyhow::{Context, Result, bail};
use clap::Subcommand;
use std::path::{Path, PathBuf};

/// Data source commands
#[derive(Subcommand, Debug)]
pub enum DataSourceCommand {
    /// List data sources
    List,
    /// Load one data source with its plugin and show its tabs
    Show {
        /// Data source id
        id: i64,
    },
    /// Create a data source from an installed plugin
    Create {
        /// Plugin id (e.g., "prometheus", "loki")
        plugin_id: String,
    },
    /// Save a data source from a JSON or YAML file
    Update {
        /// Record file; `.yaml`/`.yml` is read as YAML, anything else as JSON
        file: PathBuf,
    },
    /// Delete a data source
    Delete {
        /// Data source id
        id: i64,
    },
    /// List data source plugins by category
    Plugins,
    /// Show the data sources known to the frontend settings
    Settings,
}

/// Run a data source command and return what should be printed
pub async fn execute(session: &Session, cmd: DataSourceCommand) -> Result<String> {
    match cmd {
        DataSourceCommand::List => {
            let records = session
                .controller
                .list()
                .await
                .context("Failed to list data sources")?;
            Ok(render::data_source_table(&records))
        }
        DataSourceCommand::Show { id } => {
            let nav = session
                .controller
                .load_one(id)
                .await
                .with_context(|| format!("Failed to load data source {id}"))?;
            Ok(render::nav_summary(&nav))
        }
        DataSourceCommand::Create { plugin_id } => {
            session
                .catalog
                .load_plugins()
                .await
                .context("Failed to load data source plugins")?;

            let Some(plugin) = session.catalog.find(&plugin_id) else {
                bail!("Unknown data source plugin: {}", plugin_id);
            };

            let id = session
                .controller
                .create(&plugin)
                .await
                .with_context(|| format!("Failed to create {} data source", plugin.name))?;

            let location = session.location.current().unwrap_or_default();
            Ok(format!("Created data source {id}\nNext: {location}\n"))
        }
        DataSourceCommand::Update { file } => {
            let record = read_record(&file)?;
            let nav = session
                .controller
                .update(&record)
                .await
                .with_context(|| format!("Failed to save data source {}", record.id))?;
            Ok(format!("Saved\n{}", render::nav_summary(&nav)))
        }
        DataSourceCommand::Delete { id } => {
            session
                .controller
                .delete(id)
                .await
                .with_context(|| format!("Failed to delete data source {id}"))?;
            Ok(format!("Deleted data source {id}\n"))
        }
        DataSourceCommand::Plugins => {
            session
                .catalog
                .load_plugins()
                .await
                .context("Failed to load data source plugins")?;
            Ok(render::plugin_catalog(&session.catalog.snapshot().categories))
        }
        DataSourceCommand::Settings => {
            session
                .refresher
                .refresh()
                .await
                .context("Failed to fetch frontend settings")?;
            Ok(render::settings_summary(
                &session.refresher.settings().snapshot(),
            ))
        }
    }
}

/// Read a data source record from a JSON or YAML file
pub fn read_record(path: &Path) -> Result<DataSourceRecord> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    );

    if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML record: {}", path.display()))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON record: {}", path.display()))
    }
}
