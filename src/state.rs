use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{services::catalog::CatalogManager, store::CatalogStore};

#[derive(Clone)]
pub struct AppState {
    pub store: CatalogStore,
    pub catalog: Arc<Mutex<CatalogManager>>,
}

impl AppState {
    pub fn new(store: CatalogStore, catalog: CatalogManager) -> Self {
        Self {
            store,
            catalog: Arc::new(Mutex::new(catalog)),
        }
    }
}
