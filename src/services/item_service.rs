use std::sync::Arc;

use tracing::warn;

use crate::db::PriceStore;
use crate::services::catalog_cache::CatalogCache;

pub const CATALOG_UNAVAILABLE: &str =
    "Could not load the item list. Check the database connection.";

/// The selectable items plus, when loading failed, the reason shown to the user.
#[derive(Debug, Clone)]
pub struct ItemCatalog {
    pub items: Arc<Vec<String>>,
    pub warning: Option<String>,
}

/// Distinct item names, served from the catalog cache while it is fresh.
///
/// A store failure yields an empty catalog with a warning instead of an error.
pub async fn list_items(store: &dyn PriceStore, cache: &CatalogCache) -> ItemCatalog {
    match cache.get_or_refresh(|| store.list_item_names()).await {
        Ok(items) => ItemCatalog { items, warning: None },
        Err(e) => {
            warn!("Item catalog unavailable: {}", e);
            ItemCatalog {
                items: Arc::new(Vec::new()),
                warning: Some(format!("{} ({})", CATALOG_UNAVAILABLE, e)),
            }
        }
    }
}

/// The item preselected in the picker: always the first one.
pub fn default_selection(items: &[String]) -> Option<&str> {
    items.first().map(String::as_str)
}
