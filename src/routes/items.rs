use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::models::ItemCatalogResponse;
use crate::services::item_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items))
}

pub async fn list_items(State(state): State<AppState>) -> Json<ItemCatalogResponse> {
    info!("GET /api/items - Listing items");
    let catalog = item_service::list_items(state.store.as_ref(), &state.catalog).await;

    Json(ItemCatalogResponse {
        default_item: item_service::default_selection(&catalog.items).map(str::to_string),
        items: catalog.items.as_ref().clone(),
        warning: catalog.warning,
    })
}
