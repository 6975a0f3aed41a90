use tracing::warn;

use crate::db::PriceStore;
use crate::errors::{AppError, StoreError};
use crate::models::{Banner, ChartFigure, DashboardView, PriceFrame, PriceRecord};
use crate::services::price_service;

pub const USD_AVAILABLE: &str = "USD price data available for this item.";
pub const USD_UNAVAILABLE: &str = "USD price data not available for this item.";

/// Loads the history for one item and window and lays it out for the page.
///
/// Invalid parameters are returned as errors; store failures end up as an
/// error banner inside the view.
pub async fn load_view(
    store: &dyn PriceStore,
    item_name: &str,
    days: u32,
) -> Result<DashboardView, AppError> {
    let days = price_service::validate_days(days)?;
    let item_name = price_service::validate_item(item_name)?;

    let outcome = match price_service::get_history(store, item_name, days).await {
        Ok(records) => Ok(records),
        Err(AppError::Store(e)) => Err(e),
        Err(e) => return Err(e),
    };
    Ok(build_view(item_name, days, outcome))
}

pub fn build_view(
    item_name: &str,
    days: u32,
    outcome: Result<Vec<PriceRecord>, StoreError>,
) -> DashboardView {
    let mut view = DashboardView {
        item: item_name.to_string(),
        days,
        subtitle: None,
        banners: Vec::new(),
        secondary_available: false,
        chart: None,
        table: None,
    };

    let records = match outcome {
        Ok(records) => records,
        Err(e) => {
            view.banners.push(Banner::error(format!("Error fetching price history: {}", e)));
            return view;
        }
    };

    if records.is_empty() {
        warn!("No price data for {} in the last {} days", item_name, days);
        view.banners.push(Banner::warning(format!(
            "No data available for {} in the last {} days.",
            item_name, days
        )));
        return view;
    }

    let frame = PriceFrame::from_records(&records);
    view.secondary_available = frame.has_secondary();
    view.banners.push(if view.secondary_available {
        Banner::info(USD_AVAILABLE)
    } else {
        Banner::warning(USD_UNAVAILABLE)
    });
    view.subtitle = Some(format!("Prices of {} in the last {} days", item_name, days));
    view.chart = Some(ChartFigure::from_frame(&frame));
    view.table = Some(frame);
    view
}
