use catalog::store::CatalogStore;
use std::sync::Arc;

/// Shared application state: the injected read-only catalog.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogStore>,
}

impl AppState {
    pub fn new(catalog: impl CatalogStore + 'static) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
