use std::sync::Arc;

use crate::db::PriceStore;
use crate::services::catalog_cache::CatalogCache;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PriceStore>,
    pub catalog: Arc<CatalogCache>,
}
