use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::PriceRecord;
use crate::services::price_service::{self, DEFAULT_DAYS};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub days: Option<u32>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:item", get(get_prices))
}

pub async fn get_prices(
    Path(item): Path<String>,
    Query(query): Query<HistoryQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<PriceRecord>>, AppError> {
    let days = query.days.unwrap_or(DEFAULT_DAYS);
    info!("GET /api/prices/{}?days={} - Getting price history", item, days);
    let records = price_service::get_history(state.store.as_ref(), &item, days).await
        .map_err(|e| {
            error!("Failed to get price history for {}: {}", item, e);
            e
        })?;
    Ok(Json(records))
}
