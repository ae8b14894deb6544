//! Data models shared across the crate
//!
//! Serde representations of the remote API documents plus the derived
//! navigation structures.

pub mod datasource;
pub mod nav;
pub mod plugin;
pub mod settings;

pub use datasource::{Access, CreatedDataSource, DataSourceRecord, NewDataSource};
pub use nav::{Breadcrumb, NavItem, NavigationContext};
pub use plugin::{PluginCategory, PluginInclude, PluginInfo, PluginLink, PluginLogos, PluginMeta};
pub use settings::{DataSourceInstanceSettings, GlobalSettings};
