//! Service layer shared by the lifecycle controller and the rest of the app
//!
//! Settings refresh, data source resolution and navigation. Each piece is
//! injected into the controller at construction time.

pub mod navigation;
pub mod resolution;
pub mod settings;

pub use navigation::{DATA_SOURCES_PATH, Location, LocationState, NavIndex, Navigator, edit_path};
pub use resolution::{DataSourceResolutionService, DataSourceResolver};
pub use settings::{FrontendSettingsRefresher, SettingsHandle};
