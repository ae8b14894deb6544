//! Navigation collaborators
//!
//! [`Navigator`] receives route transitions; [`NavIndex`] holds the
//! navigation contexts published for loaded data sources.

use crate::models::NavigationContext;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::watch;

/// Route to the data source list
pub const DATA_SOURCES_PATH: &str = "/datasources";

/// Route to the edit view of one data source
pub fn edit_path(id: i64) -> String {
    format!("{DATA_SOURCES_PATH}/edit/{id}")
}

/// Receives navigation transitions
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn go_to(&self, path: &str);
}

/// Current location plus every path visited so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: Option<String>,
    pub history: Vec<String>,
}

/// Default navigator recording transitions in an observable location
#[derive(Clone)]
pub struct LocationState {
    tx: Arc<watch::Sender<Location>>,
}

impl LocationState {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Location::default());
        Self { tx: Arc::new(tx) }
    }

    /// Current path, if any transition happened
    pub fn current(&self) -> Option<String> {
        self.tx.borrow().path.clone()
    }

    pub fn history(&self) -> Vec<String> {
        self.tx.borrow().history.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Location> {
        self.tx.subscribe()
    }
}

impl Default for LocationState {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for LocationState {
    fn go_to(&self, path: &str) {
        tracing::debug!("Navigating to {}", path);
        self.tx.send_modify(|location| {
            location.path = Some(path.to_string());
            location.history.push(path.to_string());
        });
    }
}

/// Published navigation contexts, indexed by their id and their children's ids
#[derive(Clone)]
pub struct NavIndex {
    tx: Arc<watch::Sender<HashMap<String, NavigationContext>>>,
}

impl NavIndex {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(HashMap::new());
        Self { tx: Arc::new(tx) }
    }

    /// Publish a context, replacing whatever was indexed under the same ids
    pub fn publish(&self, nav: NavigationContext) {
        self.tx.send_modify(|index| {
            for child in &nav.children {
                index.insert(child.id.clone(), nav.clone());
            }
            index.insert(nav.id.clone(), nav);
        });
    }

    /// Drop a context and every child id indexed to it
    pub fn remove(&self, nav_id: &str) -> bool {
        self.tx.send_if_modified(|index| {
            let before = index.len();
            index.retain(|_, nav| nav.id != nav_id);
            index.len() != before
        })
    }

    pub fn get(&self, id: &str) -> Option<NavigationContext> {
        self.tx.borrow().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn subscribe(&self) -> watch::Receiver<HashMap<String, NavigationContext>> {
        self.tx.subscribe()
    }
}

impl Default for NavIndex {
    fn default() -> Self {
        Self::new()
    }
}
