//! Data source lifecycle
//!
//! The controller drives every mutation; the store and nav index are the
//! observable results.

pub mod controller;
pub mod nav_model;
pub mod naming;
pub mod store;

pub use controller::{Collaborators, DataSourceController};
pub use nav_model::{DataSourceNavBuilder, NavModelBuilder, nav_id};
pub use naming::{find_new_name, name_exists};
pub use store::{DataSourceStore, StoreSnapshot};
