pub mod catalog_cache;
pub mod dashboard_service;
pub mod item_service;
pub mod price_service;
