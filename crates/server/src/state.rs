use std::sync::Arc;

use service::{store::RecordStore, RegistryService};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub registry: RegistryService<dyn RecordStore>,
}

impl ServerState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { registry: RegistryService::new(store) }
    }
}
