use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::routes::{dashboard, health, items, prices};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::<AppState>::new()
        .route("/", get(dashboard::index))
        .nest("/health", health::router())
        .nest("/api/items", items::router())
        .nest("/api/prices", prices::router())
        .nest("/api/dashboard", dashboard::router())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use chrono::Duration as ChronoDuration;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::db::testing::UnreachableStore;
    use crate::db::{MemoryPriceStore, PriceStore};
    use crate::models::PriceRecord;
    use crate::services::catalog_cache::CatalogCache;
    use crate::services::price_service::current_time;

    fn app_with(store: impl PriceStore + 'static) -> Router {
        create_app(AppState {
            store: Arc::new(store),
            catalog: Arc::new(CatalogCache::new(Duration::from_secs(3600))),
        })
    }

    fn seeded_store() -> MemoryPriceStore {
        let now = current_time();
        MemoryPriceStore::new(vec![
            PriceRecord::new("Apple", 0.35, Some(0.011), now - ChronoDuration::hours(1)),
            PriceRecord::new("Apple", 0.34, Some(0.010), now - ChronoDuration::days(1)),
            PriceRecord::new("Apple", 0.30, Some(0.009), now - ChronoDuration::days(40)),
            PriceRecord::new("Wood", 0.12, None, now - ChronoDuration::days(2)),
        ])
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let (status, body) = get(app, uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(app_with(seeded_store()), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"OK");
    }

    #[tokio::test]
    async fn test_index_serves_dashboard_page() {
        let (status, body) = get(app_with(seeded_store()), "/").await;

        assert_eq!(status, StatusCode::OK);
        let page = String::from_utf8(body).unwrap();
        assert!(page.contains("Sunflower Land - Prices"));
        assert!(page.contains("/api/dashboard"));
    }

    #[tokio::test]
    async fn test_items_endpoint_defaults_to_first_item() {
        let (status, json) = get_json(app_with(seeded_store()), "/api/items").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["items"], serde_json::json!(["Apple", "Wood"]));
        assert_eq!(json["default_item"], "Apple");
        assert!(json["warning"].is_null());
    }

    #[tokio::test]
    async fn test_items_endpoint_degrades_when_store_is_down() {
        let (status, json) = get_json(app_with(UnreachableStore), "/api/items").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["items"], serde_json::json!([]));
        assert!(json["default_item"].is_null());
        assert!(json["warning"].is_string());
    }

    #[tokio::test]
    async fn test_prices_endpoint_applies_window() {
        let (status, json) = get_json(app_with(seeded_store()), "/api/prices/Apple?days=30").await;

        assert_eq!(status, StatusCode::OK);
        let records = json.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["p2p_price"], 0.34);
        assert_eq!(records[1]["p2p_price"], 0.35);
    }

    #[tokio::test]
    async fn test_prices_endpoint_status_codes() {
        let (bad_days, _) = get(app_with(seeded_store()), "/api/prices/Apple?days=91").await;
        let (down, json) = get_json(app_with(UnreachableStore), "/api/prices/Apple").await;

        assert_eq!(bad_days, StatusCode::BAD_REQUEST);
        assert_eq!(down, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["error"], "Price database unavailable");
    }

    #[tokio::test]
    async fn test_dashboard_view_for_item_without_usd() {
        let (status, json) = get_json(app_with(seeded_store()), "/api/dashboard?item=Wood&days=30").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["secondary_available"], false);
        assert_eq!(json["banners"][0]["level"], "warning");
        assert_eq!(json["chart"]["data"].as_array().unwrap().len(), 1);
        assert!(json["chart"]["layout"].get("yaxis2").is_none());
        assert_eq!(json["table"]["item_name"], serde_json::json!(["Wood"]));
    }

    #[tokio::test]
    async fn test_dashboard_view_defaults_to_thirty_days() {
        let (status, json) = get_json(app_with(seeded_store()), "/api/dashboard?item=Apple").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["days"], 30);
        assert_eq!(json["secondary_available"], true);
        assert_eq!(json["banners"][0]["level"], "info");
    }

    #[tokio::test]
    async fn test_dashboard_view_reports_store_failure_as_banner() {
        let (status, json) = get_json(app_with(UnreachableStore), "/api/dashboard?item=Apple&days=30").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["banners"][0]["level"], "error");
        assert!(json["chart"].is_null());
    }
}
