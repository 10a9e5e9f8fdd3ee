pub mod classifier;
pub mod config;
pub mod rest;
pub mod store;

use std::sync::Arc;

use classifier::ClassifierClient;
use config::ServerConfig;
use store::TaskStore;

/// Shared application state passed to every REST handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    /// The authoritative in-memory task list. Owned here and injected into
    /// handlers — there is no ambient global store.
    pub store: Arc<TaskStore>,
    /// Outbound client for the priority classification service.
    pub classifier: Arc<ClassifierClient>,
}
