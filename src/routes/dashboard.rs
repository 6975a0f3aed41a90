use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::DashboardView;
use crate::services::dashboard_service;
use crate::services::price_service::DEFAULT_DAYS;
use crate::state::AppState;

const DASHBOARD_PAGE: &str = include_str!("assets/dashboard.html");

#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    pub item: String,
    pub days: Option<u32>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_view))
}

/// GET /
///
/// The page itself. It asks `/api/items` for the picker and `/api/dashboard`
/// whenever the item or the day range changes.
pub async fn index() -> Html<&'static str> {
    info!("GET / - Serving dashboard page");
    Html(DASHBOARD_PAGE)
}

/// GET /api/dashboard?item=..&days=..
pub async fn get_view(
    Query(query): Query<ViewQuery>,
    State(state): State<AppState>,
) -> Result<Json<DashboardView>, AppError> {
    let days = query.days.unwrap_or(DEFAULT_DAYS);
    info!("GET /api/dashboard?item={}&days={} - Building view", query.item, days);
    let view = dashboard_service::load_view(state.store.as_ref(), &query.item, days).await?;
    Ok(Json(view))
}
