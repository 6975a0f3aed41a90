use chrono::{Duration, Local, NaiveDateTime};
use tracing::{error, info};

use crate::db::PriceStore;
use crate::errors::AppError;
use crate::models::PriceRecord;

pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 90;
pub const DEFAULT_DAYS: u32 = 30;

/// Wall-clock time in the zone the price table's naive timestamps are written in.
pub fn current_time() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn validate_days(days: u32) -> Result<u32, AppError> {
    if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
        return Err(AppError::Validation(format!(
            "days must be between {} and {}, got {}",
            MIN_DAYS, MAX_DAYS, days
        )));
    }
    Ok(days)
}

/// Rejects blank names. The name itself is passed on untouched, item names
/// are matched exactly.
pub fn validate_item(item_name: &str) -> Result<&str, AppError> {
    if item_name.trim().is_empty() {
        return Err(AppError::Validation("item must not be empty".to_string()));
    }
    Ok(item_name)
}

/// `[now - days, now]`.
pub fn trailing_window(now: NaiveDateTime, days: u32) -> (NaiveDateTime, NaiveDateTime) {
    (now - Duration::days(i64::from(days)), now)
}

/// Price history of one item over the trailing `days`, oldest first.
///
/// An item without rows in the window yields `Ok(vec![])`; an unreachable or
/// failing store yields `Err`.
pub async fn get_history(
    store: &dyn PriceStore,
    item_name: &str,
    days: u32,
) -> Result<Vec<PriceRecord>, AppError> {
    get_history_at(store, item_name, days, current_time()).await
}

pub async fn get_history_at(
    store: &dyn PriceStore,
    item_name: &str,
    days: u32,
    now: NaiveDateTime,
) -> Result<Vec<PriceRecord>, AppError> {
    let days = validate_days(days)?;
    let item_name = validate_item(item_name)?;
    let (start, end) = trailing_window(now, days);

    let records = store
        .fetch_range(item_name, start, end)
        .await
        .map_err(|e| {
            error!("Failed to fetch price history for {} over {} days: {}", item_name, days, e);
            AppError::Store(e)
        })?;

    info!("Loaded {} price records for {} over {} days", records.len(), item_name, days);
    Ok(records)
}
